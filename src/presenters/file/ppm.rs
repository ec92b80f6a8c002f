use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &Frame, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = std::fs::File::create(filepath)?;
        let width = frame.dims().width();
        let height = frame.dims().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(&frame.to_rgb_bytes())?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
