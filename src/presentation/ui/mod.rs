//! UI screens.

mod app;
mod backend;
mod invitation_screen;
mod notification_popup;
mod splash_screen;
mod utils;

pub use app::{App, AppServices};
pub use invitation_screen::{InvitationKeyResult, InvitationScreen, InvitationScreenState};
pub use notification_popup::NotificationPopup;
pub use splash_screen::SplashScreen;
