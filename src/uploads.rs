use std::env;
use std::path::{Path, PathBuf};

/// The uploads folder both jobs act on. It sits next to the directory the
/// executables live in: `<exe dir>/../uploads`.
#[derive(Debug)]
pub struct UploadsDir {
    path: PathBuf,
}

impl UploadsDir {
    pub fn locate() -> Result<Self, String> {
        let exe = env::current_exe()
            .map_err(|err| format!("Could not determine the executable path: {err}"))?;
        let exe_dir = exe
            .parent()
            .ok_or_else(|| String::from("The executable path has no parent directory"))?;

        Ok(UploadsDir {
            path: exe_dir.join("..").join("uploads"),
        })
    }

    pub fn at(path: PathBuf) -> Self {
        UploadsDir { path }
    }

    pub fn validate(&self) -> Result<&Self, String> {
        if !self.path.exists() {
            return Err(format!("The path {:?} does not exist.", self.path));
        }
        if !self.path.is_dir() {
            return Err(format!("{:?} is not a directory.", self.path));
        }

        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
