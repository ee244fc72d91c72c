use crate::error::RailNetError;
use crate::input::read_ops::DELIMITER;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// serializes one representation's node and edge collections and persists
/// them as `<representation>_nodes.csv` and `<representation>_edges.csv`
/// in the output directory.
///
/// both collections are serialized to memory before any file is touched,
/// and each file is written to a temporary sibling and renamed into place,
/// so a failing run leaves no partial output behind.
pub fn write_network<N, E>(
    output_dir: &Path,
    representation: &str,
    nodes: &[N],
    edges: &[E],
) -> Result<(), RailNetError>
where
    N: Serialize,
    E: Serialize,
{
    let node_bytes = to_csv_bytes(nodes)?;
    let edge_bytes = to_csv_bytes(edges)?;
    std::fs::create_dir_all(output_dir)?;
    persist(&node_path(output_dir, representation), &node_bytes)?;
    persist(&edge_path(output_dir, representation), &edge_bytes)?;
    log::info!(
        "wrote {} nodes and {} edges for the {representation} representation",
        nodes.len(),
        edges.len()
    );
    Ok(())
}

pub fn node_path(output_dir: &Path, representation: &str) -> PathBuf {
    output_dir.join(format!("{representation}_nodes.csv"))
}

pub fn edge_path(output_dir: &Path, representation: &str) -> PathBuf {
    output_dir.join(format!("{representation}_edges.csv"))
}

fn to_csv_bytes<T: Serialize>(rows: &[T]) -> Result<Vec<u8>, RailNetError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| RailNetError::Io(e.into_error()))
}

fn persist(path: &Path, bytes: &[u8]) -> Result<(), RailNetError> {
    let tmp = path.with_extension("csv.tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{edge_path, node_path, write_network};
    use serde::Serialize;

    #[derive(Serialize)]
    struct NodeRow {
        #[serde(rename = "BPUIC")]
        bpuic: u32,
        #[serde(rename = "STATION_NAME")]
        station_name: &'static str,
    }

    #[derive(Serialize)]
    struct EdgeRow {
        #[serde(rename = "BPUIC1")]
        from: u32,
        #[serde(rename = "BPUIC2")]
        to: u32,
    }

    #[test]
    fn test_reruns_are_byte_identical() {
        let dir = std::env::temp_dir().join("railnet-write-ops");
        let nodes = vec![
            NodeRow {
                bpuic: 8503000,
                station_name: "Zürich HB",
            },
            NodeRow {
                bpuic: 8507000,
                station_name: "Bern",
            },
        ];
        let edges = vec![EdgeRow {
            from: 8503000,
            to: 8507000,
        }];

        write_network(&dir, "stops", &nodes, &edges).expect("first run should write");
        let first_nodes = std::fs::read(node_path(&dir, "stops")).expect("node file exists");
        let first_edges = std::fs::read(edge_path(&dir, "stops")).expect("edge file exists");

        write_network(&dir, "stops", &nodes, &edges).expect("second run should write");
        let second_nodes = std::fs::read(node_path(&dir, "stops")).expect("node file exists");
        let second_edges = std::fs::read(edge_path(&dir, "stops")).expect("edge file exists");

        assert_eq!(first_nodes, second_nodes);
        assert_eq!(first_edges, second_edges);
        assert!(String::from_utf8(first_edges)
            .expect("valid utf-8")
            .starts_with("BPUIC1;BPUIC2\n"));
    }

    #[test]
    fn test_no_temporary_files_remain() {
        let dir = std::env::temp_dir().join("railnet-write-ops-tmp");
        let nodes = vec![NodeRow {
            bpuic: 8507000,
            station_name: "Bern",
        }];
        let edges: Vec<EdgeRow> = vec![EdgeRow {
            from: 8507000,
            to: 8507000,
        }];
        write_network(&dir, "changes", &nodes, &edges).expect("run should write");
        let leftovers: Vec<_> = std::fs::read_dir(&dir)
            .expect("output dir exists")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
