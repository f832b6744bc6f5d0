use std::fs;
use std::path::{Path, PathBuf};

use geo_types::{Geometry, Point};

use crate::vector::{Defn, FieldType, FieldValue, MemoryLayer};

/// A temporary directory populated with empty files.
///
/// The directory is removed when the value is dropped.
pub struct TempFixture {
    temp_dir: tempfile::TempDir,
}

impl TempFixture {
    /// Creates a temporary directory containing `names` as empty files.
    pub fn with_files(names: &[&str]) -> Self {
        let fixture = Self {
            temp_dir: tempfile::tempdir().unwrap(),
        };
        for name in names {
            fixture.touch(name);
        }
        fixture
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The directory path as a connection string base.
    pub fn uri(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }
}

/// Eight point features with fids `0..8`.
///
/// Fields are `id` (1..=8), `name`, `area` and `id_2`.
pub fn points2() -> MemoryLayer {
    let defn = Defn::from_fields(&[
        ("id", FieldType::Integer),
        ("name", FieldType::String),
        ("area", FieldType::Real),
        ("id_2", FieldType::Integer),
    ]);
    let mut layer = MemoryLayer::new("points2", defn);
    let id_2 = [2, 1, 0, 2, 1, 0, 0, 0];
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    for (i, (id_2, name)) in id_2.iter().zip(names).enumerate() {
        let id = i as i32 + 1;
        let geometry = Geometry::Point(Point::new(f64::from(id), f64::from(*id_2)));
        layer
            .add_feature(
                Some(geometry),
                vec![
                    Some(FieldValue::IntegerValue(id)),
                    Some(FieldValue::from(name)),
                    Some(FieldValue::RealValue(f64::from(id) * 1.5)),
                    Some(FieldValue::IntegerValue(*id_2)),
                ],
            )
            .unwrap();
    }
    layer
}

/// Unwrap a column of non-null integer values.
pub fn ints(column: &[Option<FieldValue>]) -> Vec<i32> {
    column
        .iter()
        .map(|value| value.clone().and_then(FieldValue::into_int).unwrap())
        .collect()
}
