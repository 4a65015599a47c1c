pub mod trigger_service;
