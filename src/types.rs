//src/types.rs

/// Column names of the 10-column dbcan-format hmmsearch table. Input rows
/// matching this header field-for-field are treated as a re-embedded header
/// and skipped.
pub const HMMSEARCH_HEADER: [&str; 10] = [
    "HMM_Profile",
    "Profile_Length",
    "Gene_ID",
    "Gene_Length",
    "Evalue",
    "Profile_Start",
    "Profile_End",
    "Gene_Start",
    "Gene_End",
    "Coverage",
];

/// Column names of the 13-column substrate table: four annotation columns in
/// front of the hmmsearch columns, with the raw profile ID dropped in favor
/// of the decoded subfamily.
pub const SUBSTRATE_HEADER: [&str; 13] = [
    "dbCAN_subfam",
    "Subfam_Composition",
    "Subfam_EC",
    "Substrate",
    "Profile_Length",
    "Gene_ID",
    "Gene_Length",
    "Evalue",
    "Profile_Start",
    "Profile_End",
    "Gene_Start",
    "Gene_End",
    "Coverage",
];

/// Placeholder printed for empty list fields and for an unresolved subfamily.
pub const EMPTY_FIELD: &str = "-";
