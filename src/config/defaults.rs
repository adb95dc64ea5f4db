pub fn base_url() -> String {
    String::new()
}

pub fn output_dir() -> String {
    "dist".to_string()
}

pub fn content_dir() -> String {
    "content".to_string()
}

pub fn template_dir() -> String {
    "templates".to_string()
}

pub fn static_dir() -> String {
    "static".to_string()
}
