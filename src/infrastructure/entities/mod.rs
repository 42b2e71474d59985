pub mod event_registrations;
pub mod events;
pub mod logins;
pub mod users;
