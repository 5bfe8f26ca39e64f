use serde::{Serialize, Deserialize};
use crate::network::network::{Network, DEFAULT_INIT_RANGE};

/// A serializable description of a network architecture.
///
/// Stores layer sizes and the weight-initialization range, never trained
/// weights, so architecture configurations can be kept on disk and rebuilt
/// into fresh networks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the file stem.
    pub name: String,
    /// Unit counts per layer, input first, output last.
    pub layer_sizes: Vec<usize>,
    /// Width of the uniform weight-initialization interval.
    #[serde(default = "default_init_range")]
    pub init_range: f64,
}

fn default_init_range() -> f64 {
    DEFAULT_INIT_RANGE
}

impl NetworkSpec {
    /// Builds a freshly initialized `Network` matching this description.
    pub fn build(&self) -> Network {
        Network::with_init_range(&self.layer_sizes, self.init_range)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_produces_matching_network() {
        let spec = NetworkSpec {
            name: "xor".to_string(),
            layer_sizes: vec![2, 8, 1],
            init_range: 1.0,
        };

        let net = spec.build();

        assert_eq!(net.layer_sizes(), &[2, 8, 1]);
        assert_eq!(net.weights()[0].dim(), (3, 8));
        assert_eq!(net.weights()[1].dim(), (9, 1));
        assert!(net.weights()[0].iter().all(|&v| v.abs() <= 0.5));
    }

    #[test]
    fn save_then_load_preserves_the_spec() {
        let spec = NetworkSpec {
            name: "roundtrip".to_string(),
            layer_sizes: vec![4, 6, 2],
            init_range: 0.05,
        };
        let path = std::env::temp_dir().join("batchprop_spec_test.json");
        let path = path.to_str().unwrap();

        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded.name, spec.name);
        assert_eq!(loaded.layer_sizes, spec.layer_sizes);
        assert_eq!(loaded.init_range, spec.init_range);
    }
}
