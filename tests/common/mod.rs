#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const LABELMAP_JSON: &str = r#"[
  {"label_id": 1, "object_name": "ripe"},
  {"label_id": 2, "object_name": "unripe"},
  {"label_id": 0, "object_name": "background"}
]"#;

pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&[0; 24]);

    bytes.resize(file_size as usize, 0);
    bytes
}

/// PNG signature plus IHDR chunk; enough for a header-only size probe.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 2, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bytes).expect("write file");
}

/// Builds a `<root>/strawberries/...` tree inside a temp directory.
pub struct DatasetTree {
    pub root: PathBuf,
}

impl DatasetTree {
    pub fn new(root: &Path) -> Self {
        let tree = Self {
            root: root.to_path_buf(),
        };
        fs::create_dir_all(tree.category_root()).expect("create category root");
        tree
    }

    pub fn category_root(&self) -> PathBuf {
        self.root.join("strawberries")
    }

    pub fn labelmap(&self, json: &str) -> &Self {
        write_file(&self.category_root().join("labelmap.json"), json.as_bytes());
        self
    }

    pub fn split(&self, split: &str, names: &[&str]) -> &Self {
        let mut content = names.join("\n");
        content.push('\n');
        write_file(
            &self.category_root().join("sets").join(format!("{split}.txt")),
            content.as_bytes(),
        );
        self
    }

    /// Writes a PNG-header image; the probe sniffs content, so any extension works.
    pub fn image(&self, subcategory: &str, file_name: &str, width: u32, height: u32) -> &Self {
        let bytes = if file_name.to_ascii_lowercase().ends_with(".bmp") {
            bmp_bytes(width, height)
        } else {
            png_bytes(width, height)
        };
        write_file(
            &self
                .category_root()
                .join(subcategory)
                .join("images")
                .join(file_name),
            &bytes,
        );
        self
    }

    pub fn boxes(&self, subcategory: &str, stem: &str, csv: &str) -> &Self {
        write_file(
            &self
                .category_root()
                .join(subcategory)
                .join("csv")
                .join(format!("{stem}.csv")),
            csv.as_bytes(),
        );
        self
    }
}
