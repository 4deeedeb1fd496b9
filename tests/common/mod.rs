#[macro_export]
macro_rules! lines_from_relative_file {
    ($f : expr) => {{
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join($f);
        let f = std::fs::File::open(path).unwrap();
        std::io::BufRead::lines(std::io::BufReader::new(f))
    }};
}

#[macro_export]
macro_rules! relative_file {
    ($f : expr) => {{
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join($f)
    }};
}
