pub mod digest_service;
