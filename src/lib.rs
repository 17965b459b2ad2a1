//! Nutri Onboard — gesture-driven onboarding wizard for a nutrition
//! WebApp hosted inside a chat client.

pub mod config;
pub mod error;
pub mod gesture;
pub mod host;
pub mod onboarding;
pub mod replay;
