mod alert;
mod button;
mod loading_screen;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use loading_screen::LoadingScreen;
pub(crate) use spinner::Spinner;
