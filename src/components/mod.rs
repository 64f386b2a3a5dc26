/// UI components for the WireAdmin web console
///
/// Reusable pieces for the admin interface: layout shell, toast
/// notifications, modal dialogs, action buttons, and status badges.

pub mod badge;
pub mod button;
pub mod footer;
pub mod header;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod shell;
pub mod sidebar;
