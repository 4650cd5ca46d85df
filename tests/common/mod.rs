#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the spec-guard binary.
#[macro_export]
macro_rules! spec_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("spec-guard"))
    };
}

/// A temporary project with `spec/` and `app/` trees.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture with empty `spec/` and `app/` directories.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_dir("spec");
        fixture.create_dir("app");
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".spec-guard.toml", content);
    }

    /// A model with a conforming spec.
    pub fn create_model(&self, name: &str, constant: &str) {
        self.create_file(&format!("app/models/{name}.rb"), &format!("class {constant}\nend\n"));
        self.create_file(
            &format!("spec/models/{name}_spec.rb"),
            &format!(
                "describe {constant} do\n  describe '#title' do\n    it 'is present' do\n      expect(subject.title).to be_present\n    end\n  end\nend\n"
            ),
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A spec breaking every guide rule once.
pub const MESSY_SPEC: &str = r#"describe Article do
  describe 'summary' do
    it 'truncates and strips' do
      expect(article.summary).to eq 'x'
      expect(article.summary).not_to include '<p>'
    end
  end

  it 'stubs itself' do
    allow(article).to receive(:save)
  end

  it { should validate_presence_of(:title) }
end
"#;
