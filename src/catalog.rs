//! Mock Content Catalog
//!
//! Hardcoded story records and their texts, seeded into the store at
//! startup. Stands in for a real backend behind the store helpers.

use crate::models::{Book, Category};

struct BookSeed {
    id: u32,
    title: &'static str,
    author: &'static str,
    duration_minutes: u32,
    category: Category,
    age_range: &'static str,
    description: &'static str,
    rating: f32,
    image: &'static str,
}

const BOOK_SEEDS: &[BookSeed] = &[
    BookSeed {
        id: 1,
        title: "The Lost Compass",
        author: "Mira Holt",
        duration_minutes: 8,
        category: Category::Adventure,
        age_range: "6-9",
        description: "A map, a storm, and a secret island nobody believed in.",
        rating: 4.8,
        image: "assets/covers/lost_compass.png",
    },
    BookSeed {
        id: 2,
        title: "Moonlit Dragons",
        author: "Sam Reyes",
        duration_minutes: 10,
        category: Category::Fantasy,
        age_range: "5-8",
        description: "Dragons who only fly at night, and the girl who stays up to watch.",
        rating: 4.9,
        image: "assets/covers/moonlit_dragons.png",
    },
    BookSeed {
        id: 3,
        title: "Badger's Big Day",
        author: "Mira Holt",
        duration_minutes: 5,
        category: Category::Animals,
        age_range: "3-6",
        description: "A shy badger finds his voice at the forest fair.",
        rating: 4.6,
        image: "assets/covers/badgers_big_day.png",
    },
    BookSeed {
        id: 4,
        title: "Goodnight, Harbor",
        author: "Lena Okafor",
        duration_minutes: 6,
        category: Category::Bedtime,
        age_range: "2-5",
        description: "The boats go to sleep one by one as the lighthouse hums.",
        rating: 4.7,
        image: "assets/covers/goodnight_harbor.png",
    },
    BookSeed {
        id: 5,
        title: "The Glass Slipper, Retold",
        author: "Sam Reyes",
        duration_minutes: 12,
        category: Category::FairyTale,
        age_range: "6-10",
        description: "An old tale with a brand-new ending the mice vote on.",
        rating: 4.5,
        image: "assets/covers/glass_slipper.png",
    },
    BookSeed {
        id: 6,
        title: "River Pirates of Willow Creek",
        author: "Theo Brandt",
        duration_minutes: 9,
        category: Category::Adventure,
        age_range: "7-10",
        description: "Two cousins, one raft, and a summer of buried treasure.",
        rating: 4.4,
        image: "assets/covers/river_pirates.png",
    },
    BookSeed {
        id: 7,
        title: "The Cloud Shepherd",
        author: "Lena Okafor",
        duration_minutes: 7,
        category: Category::Fantasy,
        age_range: "4-8",
        description: "Somebody has to herd the clouds home before it rains.",
        rating: 4.7,
        image: "assets/covers/cloud_shepherd.png",
    },
    BookSeed {
        id: 8,
        title: "Penguin Post Office",
        author: "Theo Brandt",
        duration_minutes: 6,
        category: Category::Animals,
        age_range: "3-7",
        description: "Every letter in Antarctica is late, and Pip knows why.",
        rating: 4.8,
        image: "assets/covers/penguin_post.png",
    },
    BookSeed {
        id: 9,
        title: "Ten Sleepy Stars",
        author: "Mira Holt",
        duration_minutes: 4,
        category: Category::Bedtime,
        age_range: "2-4",
        description: "Count the stars down to zero and tuck the sky in.",
        rating: 4.9,
        image: "assets/covers/ten_sleepy_stars.png",
    },
    BookSeed {
        id: 10,
        title: "The Baker and the North Wind",
        author: "Sam Reyes",
        duration_minutes: 11,
        category: Category::FairyTale,
        age_range: "5-9",
        description: "A stubborn baker strikes a bargain with the coldest customer in town.",
        rating: 4.3,
        image: "assets/covers/baker_north_wind.png",
    },
];

/// Fixed story text per book id, paginated by blank lines in the reader
const BOOK_TEXTS: &[(u32, &str)] = &[
    (1, "Juno found the compass at the bottom of her grandmother's sea chest, wrapped in a chart of an island that no map in school had ever shown.\n\nThe needle did not point north. It pointed at the harbor, then at the storm clouds, then at Juno herself, as if it were making up its mind.\n\nShe borrowed her brother's dinghy before breakfast. By the time the rain came she was past the breakwater, and the needle finally held still.\n\nThe island rose out of the fog exactly where the old chart promised, green and impossible, with a cove shaped like a question mark.\n\nWhat she found there stayed a secret between her and the compass. But every storm after that, the needle pointed home."),
    (2, "Everyone in Ember Vale knew dragons were gone. Tali knew better, because the bakery roof had claw marks and the claw marks were warm.\n\nShe waited on the roof with a lantern and a jar of honey, because her book said dragons kept old bargains and older sweet tooths.\n\nAt moonrise the sky rippled. Wings the color of deep water slid between the stars, silent as snowfall.\n\nThe dragon landed on the chimney, took the honey politely, and asked why a small person was awake at the hour of flying.\n\n\"Because nobody believed me,\" said Tali. \"Good,\" said the dragon. \"That is the only hour we have.\"\n\nAfter that night Tali slept through the mornings, and the bakery always smelled faintly of rain and honey."),
    (3, "Badger practiced his hello all the way to the forest fair. Hello. HELLO. h-hello. None of them sounded right.\n\nAt the fair, Fox juggled acorns and Owl sang two songs at once. Badger stood behind the lemonade stand where nobody could see him.\n\nThen the wind stole Rabbit's poem right off the stage and dropped it in the stream. Rabbit froze. The crowd went quiet.\n\nBadger knew the poem by heart. He had heard Rabbit practice it through the hedge all week.\n\nSo he climbed onto the stage, next to his friend, and said the whole poem in his warm underground voice. The crowd cheered for the both of them.\n\nOn the way home, Badger said hello to everyone. It came out perfectly every time."),
    (4, "The sun slips under the water and the harbor yawns wide.\n\nThe little red tug is first to sleep, tied snug to the pier, dreaming of ropes and whistles.\n\nThe fishing boats come home next, one, two, three, their lanterns blinking slow as sleepy eyes.\n\nThe ferry hushes her engine and the gulls fold up like letters on the roof of the pilot house.\n\nHigh on the hill the lighthouse hums its one low note, sweeping a blanket of light across the bay.\n\nGoodnight, tug. Goodnight, boats. Goodnight, harbor. The tide will rock you till morning."),
    (5, "You have heard this story before, but you have not heard it the way the mice tell it, and the mice were there.\n\nThe slipper was glass, that part is true. But it fit half the kingdom, because glass stretches if you warm it by the fire, and the duke was in a hurry.\n\nSo the mice called a vote in the palace pantry. The question: who had actually danced until the clock struck twelve?\n\nThe cook's daughter had flour on her gown. The stable girl had straw in her hair. And Ella had a matching slipper in her apron pocket, which settled it.\n\nThe wedding cake was enormous. The mice know, because they finished it."),
    (6, "Willow Creek is four feet deep at the worst of it, which is plenty deep for pirates.\n\nNico and June built the raft out of fence boards and two barrels, and named her The Unsinkable, which lasted until Tuesday.\n\nThe treasure map came out of a cereal box, but the X was real enough if you believed it hard, and they believed it very hard.\n\nThey dug under the willow at the bend and found a tin box. Inside: six marbles, a whistle, and a note that said FINDERS KEEPERS, 1987.\n\nThey added two marbles and a friendship bracelet, buried it deeper, and drew a better map. Pirates owe the future a treasure, June said. That's the code."),
    (7, "The shepherd's name was Bo, and his flock weighed nothing at all.\n\nEvery evening Bo climbed the tall hill with a crook made of kite string and let out a long, low whistle that only clouds can hear.\n\nThe fat white ones came easily, bumping along like sheep. The wispy ones dawdled over the orchard, pretending to be fog.\n\nBut the storm cloud would not come. It sulked over the valley, grumbling thunder, dragging its gray wool through the treetops.\n\nBo did not shout. He sat down beside it on the hill and waited, the way you do for anyone having a loud, dark day.\n\nWhen it finally rained, it rained in the reservoir, right where rain belongs, and the storm cloud slept in the barn with the others."),
    (8, "The mail in Antarctica was late. Not a little late. A whole season late.\n\nPip sorted envelopes at the Penguin Post Office and knew every address on the ice, which is how she noticed the pattern: every lost letter had gone out on Gus's route.\n\nGus was not a thief. Gus was a skua with poor eyesight and a worse filing system, and his nest, when Pip found it, was made entirely of first-class mail.\n\nPip did not yell. She traded him a crate of shredded newspaper, nest-grade, premium soft.\n\nThey delivered the backlog together in one heroic week, Pip reading addresses, Gus flying the long hops.\n\nNow the sign on the office says: PENGUIN POST. AIR DELIVERY AVAILABLE. ASK FOR GUS."),
    (9, "Ten stars over the rooftop, and one small yawn.\n\nNine stars when the curtain closes. Eight when the dog circles twice and flops.\n\nSeven for the cars going quiet. Six for the kettle's last whisper.\n\nFive stars, four stars, slow as syrup. Three for your eyes, which are closing.\n\nTwo stars left, and they can manage on their own.\n\nOne star. Zero. The sky is tucked in, and so are you."),
    (10, "The North Wind came into the bakery on the first cold morning and ate every loaf without paying.\n\nMarta the baker did not chase it out. You cannot chase the wind. Instead she left the day-old bread on the sill and started keeping accounts.\n\nBy midwinter the wind owed her forty loaves, nine buns, and one wedding cake it had blown clean off a table.\n\nSo Marta stood in the doorway and named the debt out loud. The wind howled that it had no money. \"Then work,\" said Marta, and propped open the mill door.\n\nAll spring the North Wind turned the mill wheel, grinding flour fine as snow, grumbling the whole time.\n\nThe bread that year was the lightest anyone could remember. Wind-raised, Marta called it, and she always set one loaf on the sill, paid in full."),
];

/// Build the catalog, fresh and unfavorited, at store construction
pub fn seed_books() -> Vec<Book> {
    BOOK_SEEDS
        .iter()
        .map(|seed| Book {
            id: seed.id,
            title: seed.title.to_string(),
            author: seed.author.to_string(),
            duration_minutes: seed.duration_minutes,
            category: seed.category,
            age_range: seed.age_range.to_string(),
            description: seed.description.to_string(),
            rating: seed.rating,
            is_favorite: false,
            image: seed.image.to_string(),
        })
        .collect()
}

/// The fixed story text for a book, if it has one
pub fn book_text(id: u32) -> Option<&'static str> {
    BOOK_TEXTS
        .iter()
        .find(|(book_id, _)| *book_id == id)
        .map(|(_, text)| *text)
}
