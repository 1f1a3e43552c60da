//! Screen and Widget Components

pub mod prompt;

mod book_card;
mod bottom_nav;
mod empty_state;

mod book_detail;
mod book_reader;
mod dashboard;
mod library;
mod login;
mod profile;
mod signup;
mod status;
mod stories;
mod transition;

pub use bottom_nav::BottomNav;

pub use book_detail::BookDetailScreen;
pub use book_reader::BookReaderScreen;
pub use dashboard::DashboardScreen;
pub use library::LibraryScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use signup::SignupScreen;
pub use status::StatusScreen;
pub use stories::StoriesScreen;
pub use transition::TransitionScreen;
