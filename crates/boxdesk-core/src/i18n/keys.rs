//! Typed message keys

use boxdesk_types::Status;

macro_rules! message_keys {
    ($($(#[$meta:meta])* $variant:ident => $path:literal,)*) => {
        /// Every display string of the dashboard
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($(#[$meta])* $variant,)*
        }

        impl MessageKey {
            /// All keys in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Dotted path of the key, e.g. `device.updateError`
            #[must_use]
            pub const fn path(self) -> &'static str {
                match self {
                    $(Self::$variant => $path,)*
                }
            }
        }
    };
}

message_keys! {
    /// Save button
    CommonSave => "common.save",
    /// Cancel button
    CommonCancel => "common.cancel",
    /// Edit button
    CommonEdit => "common.edit",
    /// Status label
    CommonStatus => "common.status",
    /// Devices label
    CommonDevices => "common.devices",
    /// Search label
    CommonSearch => "common.search",
    /// Filter label
    CommonFilter => "common.filter",
    /// Close button
    CommonClose => "common.close",
    /// Suffix for a selection count
    CommonSelected => "common.selected",
    /// Empty list placeholder
    CommonNoData => "common.noData",
    /// Loading indicator
    CommonLoading => "common.loading",
    /// Error banner prefix
    CommonError => "common.error",
    /// Heading of the sync note
    CommonImportantNote => "common.importantNote",
    /// Save button while a save is in flight
    CommonSaving => "common.saving",
    /// Page title
    DashboardTitle => "dashboard.title",
    /// Search box placeholder
    DashboardSearchBoxes => "dashboard.searchBoxes",
    /// "Assigned to" label
    DashboardAssignedTo => "dashboard.assignedTo",
    /// Singular device noun
    DashboardDevice => "dashboard.device",
    /// Plural device noun
    DashboardDevices => "dashboard.devices",
    /// Technician filter option matching every box
    DashboardAllTechnicians => "dashboard.allTechnicians",
    /// Technician filter option matching unassigned boxes
    DashboardUnassigned => "dashboard.unassigned",
    /// Shown when the snapshot loaded but holds no boxes
    DashboardNoBoxes => "dashboard.noBoxes",
    /// Shown when the snapshot could not be loaded
    DashboardLoadError => "dashboard.loadError",
    /// Box detail heading
    BoxDetails => "box.details",
    /// Technician picker label
    BoxAssignedTechnician => "box.assignedTechnician",
    /// Note about backend synchronization
    BoxSyncNote => "box.syncNote",
    /// Bulk update heading
    BoxBulkUpdate => "box.bulkUpdate",
    /// Select-all checkbox
    BoxSelectAll => "box.selectAll",
    /// Bulk update button
    BoxUpdateSelected => "box.updateSelected",
    /// Shown after a box-level edit was rolled back
    BoxUpdateError => "box.updateError",
    /// Shown after a rollback also undid other edits made meanwhile
    BoxEditsUndone => "box.editsUndone",
    /// Status label for New
    BoxStatusNew => "box.status.new",
    /// Status label for In Progress
    BoxStatusInProgress => "box.status.inProgress",
    /// Status label for Completed
    BoxStatusCompleted => "box.status.completed",
    /// Status label for On Hold
    BoxStatusOnHold => "box.status.onHold",
    /// Status label for Open
    BoxStatusOpen => "box.status.open",
    /// Singular device count noun
    BoxDeviceCountSingle => "box.deviceCount.single",
    /// Plural device count noun
    BoxDeviceCountMultiple => "box.deviceCount.multiple",
    /// Device edit dialog title
    DeviceEdit => "device.edit",
    /// Serial number label
    DeviceSerialNumber => "device.serialNumber",
    /// Warranty label
    DeviceWarrantyUntil => "device.warrantyUntil",
    /// Customer issue label
    DeviceCustomerIssue => "device.customerIssue",
    /// Point of error label
    DevicePointOfError => "device.pointOfError",
    /// Error analysis label
    DeviceErrorAnalysis => "device.errorAnalysis",
    /// Error reason label
    DeviceErrorReason => "device.errorReason",
    /// Internal comments label
    DeviceInternalComments => "device.internalComments",
    /// Customer label
    DeviceCustomer => "device.customer",
    /// Shown after a device edit was rolled back
    DeviceUpdateError => "device.updateError",
}

impl MessageKey {
    /// Parse a dotted path back into a key
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.path() == path)
    }

    /// Label key of a status
    #[must_use]
    pub const fn for_status(status: Status) -> Self {
        match status {
            Status::New => Self::BoxStatusNew,
            Status::InProgress => Self::BoxStatusInProgress,
            Status::Completed => Self::BoxStatusCompleted,
            Status::OnHold => Self::BoxStatusOnHold,
        }
    }
}
