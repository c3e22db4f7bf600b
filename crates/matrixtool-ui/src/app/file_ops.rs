use iced::Task;
use matrixtool_core::Operand;
use std::path::PathBuf;

use super::{App, Message};

impl App {
    /// Opens a CSV picker for one of the input areas.
    pub fn pick_load_path(operand: Operand) -> Task<Message> {
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title(format!("Load Matrix {operand}"))
                    .add_filter("CSV", &["csv"])
                    .add_filter("All files", &["*"])
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            move |path| Message::LoadPathChosen(operand, path),
        )
    }

    /// Opens a save dialog defaulting to a `.csv` file.
    pub fn pick_save_path() -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Save Result as CSV")
                    .add_filter("CSV", &["csv"])
                    .set_file_name("result.csv")
                    .save_file()
                    .await
                    .map(|file| with_csv_extension(file.path().to_path_buf()))
            },
            Message::SavePathChosen,
        )
    }
}

/// Adds `.csv` when the user typed a name without an extension.
pub fn with_csv_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_csv_extension() {
        assert_eq!(with_csv_extension(PathBuf::from("out")), PathBuf::from("out.csv"));
        assert_eq!(with_csv_extension(PathBuf::from("out.txt")), PathBuf::from("out.txt"));
        assert_eq!(with_csv_extension(PathBuf::from("dir/a.csv")), PathBuf::from("dir/a.csv"));
    }
}
