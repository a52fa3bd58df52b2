use std::{io::BufWriter, path::PathBuf};

use anyhow::Context;
use fs_err::File;
use serde::Serialize;

pub fn write_json<P: Into<PathBuf>, T: Serialize>(path: P, value: &T) -> anyhow::Result<()> {
    let path = path.into();
    (|| {
        serde_json::to_writer_pretty(BufWriter::new(File::create(&path)?), value)
            .map_err(anyhow::Error::new)
    })()
    .with_context(|| format!("While writing {path:?}"))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::write_json;

    #[derive(PartialEq, Debug, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: usize,
    }

    #[test]
    fn written_json_reads_back() {
        let mut path = std::env::temp_dir();
        path.push("csnades_scraping_write_json_test.json");
        let value = Payload {
            name: "window".to_owned(),
            count: 3,
        };
        write_json(&path, &value).unwrap();
        let read: Payload =
            serde_json::from_str(&fs_err::read_to_string(&path).unwrap()).unwrap();
        let _ = fs_err::remove_file(&path);
        assert_eq!(read, value);
    }
}
