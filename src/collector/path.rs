//! Source path collector
//!
//! Reports where the server's own source lives. The path is a compile-time
//! constant, so the whole record is pure string computation; nothing touches
//! the filesystem at request time.

use super::InfoRecord;

/// Compile-time location of this source file
const SOURCE_FILE: &str = file!();

/// Collect the three-entry path information record
///
/// Labels and their order are fixed: Full_Path, File_Name, Extension.
pub fn collect() -> InfoRecord {
    describe(SOURCE_FILE)
}

/// Build the record for an arbitrary path string
fn describe(path: &str) -> InfoRecord {
    let name = file_name(path);

    let mut record = InfoRecord::with_capacity(3);
    record.push("Full_Path", path);
    record.push("File_Name", name);
    record.push("Extension", extension(name));
    record
}

/// Final path segment, accepting both `/` and `\` separators
fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Suffix from (and including) the last `.`; empty when the name has none
fn extension(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_labels_and_order() {
        let record = collect();
        let labels: Vec<&str> = record.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["Full_Path", "File_Name", "Extension"]);
    }

    #[test]
    fn test_collect_reports_this_source_file() {
        let record = collect();
        assert!(record.get("Full_Path").unwrap().ends_with("path.rs"));
        assert_eq!(record.get("File_Name"), Some("path.rs"));
        assert_eq!(record.get("Extension"), Some(".rs"));
    }

    #[test]
    fn test_describe_known_deployment_path() {
        let record = describe("/srv/app/server.js");
        assert_eq!(record.get("Full_Path"), Some("/srv/app/server.js"));
        assert_eq!(record.get("File_Name"), Some("server.js"));
        assert_eq!(record.get("Extension"), Some(".js"));
    }

    #[test]
    fn test_file_name_handles_separators() {
        assert_eq!(file_name("src/collector/path.rs"), "path.rs");
        assert_eq!(file_name(r"C:\srv\server.exe"), "server.exe");
        assert_eq!(file_name("bare-name"), "bare-name");
    }

    #[test]
    fn test_extension_without_dot_is_empty() {
        let record = describe("/usr/local/bin/Makefile");
        assert_eq!(record.get("Extension"), Some(""));
    }

    #[test]
    fn test_extension_of_dotfile_is_whole_name() {
        // rfind picks the leading dot, so the suffix is the full name
        assert_eq!(extension(".gitignore"), ".gitignore");
    }

    #[test]
    fn test_extension_is_suffix_of_file_name() {
        for path in ["/a/b/c.tar.gz", "relative/file.txt", "noext", "x/.hidden"] {
            let record = describe(path);
            let name = record.get("File_Name").unwrap();
            let ext = record.get("Extension").unwrap();
            let expected = name.rfind('.').map_or("", |idx| &name[idx..]);
            assert_eq!(ext, expected);
        }
    }
}
