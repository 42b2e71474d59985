pub mod event_enrollment_usecase;
pub mod login_usecase;
pub mod register_user_usecase;
