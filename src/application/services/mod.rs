pub mod directions;
pub mod notification_manager;
pub mod rsvp_store;

pub use directions::maps_search_url;
pub use notification_manager::NotificationManager;
pub use rsvp_store::RsvpStore;
