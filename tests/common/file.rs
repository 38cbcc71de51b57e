use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }

    std::fs::write(&file_spec.path, &file_spec.content).expect("Failed to write file");
}

pub fn write_generated_file(dir: &Path, file_name: &str) -> FileSpec {
    use fake::{
        Fake,
        faker::lorem::en::{Sentences, Words},
    };

    let file_content = format!(
        "{}\n{}\n",
        Sentences(2..5).fake::<Vec<String>>().join("\n"),
        Words(5..10).fake::<Vec<String>>().join(" "),
    );

    let file_spec = FileSpec::new(dir.join(file_name), file_content);
    write_file(file_spec.clone());

    file_spec
}
