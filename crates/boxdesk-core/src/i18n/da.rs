//! Danish catalog

use super::MessageKey::{self, *};

pub(super) const CATALOG: &[(MessageKey, &str)] = &[
    // common
    (CommonSave, "Gem"),
    (CommonCancel, "Annuller"),
    (CommonEdit, "Rediger"),
    (CommonStatus, "Status"),
    (CommonDevices, "Enheder"),
    (CommonSearch, "Søg"),
    (CommonFilter, "Filter"),
    (CommonClose, "Luk"),
    (CommonSelected, "valgt"),
    (CommonNoData, "Ingen data tilgængelig"),
    (CommonLoading, "Indlæser..."),
    (CommonError, "Fejl"),
    (CommonImportantNote, "Vigtig bemærkning"),
    (CommonSaving, "Gemmer..."),
    // dashboard
    (DashboardTitle, "GRAS Tekniker Dashboard"),
    (DashboardSearchBoxes, "Søg i bokse..."),
    (DashboardAssignedTo, "Tildelt til"),
    (DashboardDevice, "enhed"),
    (DashboardDevices, "enheder"),
    (DashboardAllTechnicians, "Alle teknikere"),
    (DashboardUnassigned, "Ikke tildelt"),
    (DashboardNoBoxes, "Ingen bokse fundet"),
    (DashboardLoadError, "Boksene kunne ikke indlæses"),
    // box
    (BoxDetails, "Boks Detaljer"),
    (BoxAssignedTechnician, "Tildelt Tekniker"),
    (
        BoxSyncNote,
        "Ændringer foretaget på enheder i denne boks vil blive synkroniseret med Salesforce inden for 15 minutter.",
    ),
    (BoxBulkUpdate, "Masseopdatering"),
    (BoxSelectAll, "Vælg Alle"),
    (BoxUpdateSelected, "Opdater Valgte"),
    (BoxUpdateError, "Der opstod en fejl under opdatering af boksen"),
    (BoxEditsUndone, "En opdatering fejlede og fortrød også ændringer foretaget imens"),
    (BoxStatusNew, "Ny"),
    (BoxStatusInProgress, "I gang"),
    (BoxStatusCompleted, "Afsluttet"),
    (BoxStatusOnHold, "På hold"),
    (BoxStatusOpen, "Åben"),
    (BoxDeviceCountSingle, "enhed"),
    (BoxDeviceCountMultiple, "enheder"),
    // device
    (DeviceEdit, "Rediger Enhed"),
    (DeviceSerialNumber, "Serienummer"),
    (DeviceWarrantyUntil, "Garanti indtil"),
    (DeviceCustomerIssue, "Kundens Problemrapport"),
    (DevicePointOfError, "Fejlpunkt"),
    (DeviceErrorAnalysis, "Fejlanalyse"),
    (DeviceErrorReason, "Fejlårsag"),
    (DeviceInternalComments, "Interne Kommentarer"),
    (DeviceCustomer, "Kunde"),
    (DeviceUpdateError, "Der opstod en fejl under opdatering af posten"),
];
