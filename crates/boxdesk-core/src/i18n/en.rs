//! English catalog

use super::MessageKey::{self, *};

pub(super) const CATALOG: &[(MessageKey, &str)] = &[
    // common
    (CommonSave, "Save"),
    (CommonCancel, "Cancel"),
    (CommonEdit, "Edit"),
    (CommonStatus, "Status"),
    (CommonDevices, "Devices"),
    (CommonSearch, "Search"),
    (CommonFilter, "Filter"),
    (CommonClose, "Close"),
    (CommonSelected, "selected"),
    (CommonNoData, "No data available"),
    (CommonLoading, "Loading..."),
    (CommonError, "Error"),
    (CommonImportantNote, "Important note"),
    (CommonSaving, "Saving..."),
    // dashboard
    (DashboardTitle, "GRAS Technician Dashboard"),
    (DashboardSearchBoxes, "Search boxes..."),
    (DashboardAssignedTo, "Assigned to"),
    (DashboardDevice, "device"),
    (DashboardDevices, "devices"),
    (DashboardAllTechnicians, "All technicians"),
    (DashboardUnassigned, "Unassigned"),
    (DashboardNoBoxes, "No boxes found"),
    (DashboardLoadError, "The boxes could not be loaded"),
    // box
    (BoxDetails, "Box Details"),
    (BoxAssignedTechnician, "Assigned Technician"),
    (
        BoxSyncNote,
        "Changes made to devices in this box will be synchronized with Salesforce within 15 minutes.",
    ),
    (BoxBulkUpdate, "Bulk Update"),
    (BoxSelectAll, "Select All"),
    (BoxUpdateSelected, "Update Selected"),
    (BoxUpdateError, "There was an error while updating the box"),
    (BoxEditsUndone, "An update failed and also undid changes made meanwhile"),
    (BoxStatusNew, "New"),
    (BoxStatusInProgress, "In Progress"),
    (BoxStatusCompleted, "Completed"),
    (BoxStatusOnHold, "On Hold"),
    (BoxStatusOpen, "Open"),
    (BoxDeviceCountSingle, "device"),
    (BoxDeviceCountMultiple, "devices"),
    // device
    (DeviceEdit, "Edit Device"),
    (DeviceSerialNumber, "Serial Number"),
    (DeviceWarrantyUntil, "Warranty until"),
    (DeviceCustomerIssue, "Customer Reported Issue"),
    (DevicePointOfError, "Point of Error"),
    (DeviceErrorAnalysis, "Error Analysis"),
    (DeviceErrorReason, "Error Reason"),
    (DeviceInternalComments, "Internal Comments"),
    (DeviceCustomer, "Customer"),
    (DeviceUpdateError, "There was an error while updating the record"),
];
