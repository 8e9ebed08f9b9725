//! PHP upload limits and Apache request timeouts.
/// PHP limits for large media uploads and slow imports.
pub const UPLOADS_INI: &str = "\
file_uploads = On
memory_limit = 256M
upload_max_filesize = 64M
post_max_size = 64M
max_execution_time = 300
max_input_time = 300
";

/// Apache request timeouts matching the PHP execution limit.
pub const TIMEOUTS_CONF: &str = "\
Timeout 300

<IfModule reqtimeout_module>
    RequestReadTimeout header=20-300,MinRate=500 body=300,MinRate=500
</IfModule>
";
