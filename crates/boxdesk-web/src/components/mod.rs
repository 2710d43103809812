//! Reusable view components

pub mod box_card;
pub mod device_edit_modal;
pub mod device_list;
pub mod header;
pub mod loading;
pub mod status_badge;
