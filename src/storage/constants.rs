// Gateway layout
pub const DEFAULT_BASE_PATH: &str = "/api/s3";
pub const API_VERSION_SEGMENTS: [&str; 2] = ["api", "v1"];
pub const BUCKETS_SEGMENT: &str = "buckets";
pub const OBJECTS_SEGMENT: &str = "objects";
pub const DOWNLOAD_SEGMENT: &str = "download";

// Multipart field the gateway reads the upload from
pub const UPLOAD_FIELD_NAME: &str = "file";

// Destination that makes `get` write to stdout
pub const STDOUT_MARKER: &str = "-";

// How many paths the delete confirmation prompt echoes
pub const CONFIRM_PREVIEW_LIMIT: usize = 5;
