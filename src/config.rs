use std::path::{Path, PathBuf};

/// Paths of an offset crop run
///
/// These are the only inputs of a run; crop geometry and the set of offset variants
/// are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root of the source image tree
    ///
    /// Walked recursively; the relative path of each image below this folder is
    /// reproduced in every offset tree.
    pub input_folder: PathBuf,

    /// Directory that receives one `Offset-<direction>-<step>` tree per variant
    ///
    /// Created if it does not exist.
    pub output_base_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(input_folder: impl Into<PathBuf>, output_base_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_folder: input_folder.into(),
            output_base_dir: output_base_dir.into(),
        }
    }

    /// Replace the input folder
    pub fn set_input_folder(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_folder = path.into();
        self
    }

    /// Replace the output base directory
    pub fn set_output_base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_base_dir = path.into();
        self
    }

    /// root directory of the tree for the offset variant called `offset_name`
    pub fn offset_dir(&self, offset_name: &str) -> PathBuf {
        self.output_base_dir.join(offset_name)
    }

    /// where the crop of the input file at `rel_path` goes for variant `offset_name`
    pub fn output_path(&self, offset_name: &str, rel_path: &Path) -> PathBuf {
        self.offset_dir(offset_name).join(rel_path)
    }
}
