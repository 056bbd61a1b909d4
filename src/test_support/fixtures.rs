//! Test fixtures for common test scenarios.
//!
//! [`TestProject`] is a throwaway project root on disk and
//! [`BuildDocument`] generates build documents with any field changed or
//! removed.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::util::ProjectContext;

/// A temporary project directory.
#[derive(Debug)]
pub struct TestProject {
    _tmp: TempDir,
    ctx: ProjectContext,
}

impl TestProject {
    /// Create an empty project.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let ctx = ProjectContext::with_root(tmp.path());
        TestProject { _tmp: tmp, ctx }
    }

    /// Create a project containing a main source file.
    pub fn with_main_file(path: &str) -> Self {
        let project = TestProject::new();
        project.add_file(path, "int main(void) { return 0; }\n");
        project
    }

    pub fn root(&self) -> &Path {
        self.ctx.root()
    }

    pub fn ctx(&self) -> &ProjectContext {
        &self.ctx
    }

    /// Write a file relative to the project root, creating directories.
    pub fn add_file(&self, path: &str, content: &str) {
        let full = self.root().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture directory");
        }
        fs::write(&full, content).expect("failed to write fixture file");
    }

    /// Write the build document.
    pub fn write_config(&self, doc: &BuildDocument) {
        fs::create_dir_all(self.ctx.config_dir()).expect("failed to create config dir");
        fs::write(self.ctx.config_path(), doc.to_xml()).expect("failed to write config");
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for build documents.
///
/// Defaults to a valid GNU/C document with every optional slot `NULL`.
#[derive(Debug, Clone)]
pub struct BuildDocument {
    attributes: Vec<(String, String)>,
    elements: Vec<(String, String)>,
}

impl BuildDocument {
    pub fn new() -> Self {
        BuildDocument {
            attributes: vec![
                ("Compiler".into(), "GNU".into()),
                ("CType".into(), "C".into()),
            ],
            elements: vec![
                ("BuildName".into(), "test-build".into()),
                ("CMainFile".into(), "main.c".into()),
                ("CFlagsWindows".into(), "NULL".into()),
                ("CFlagsLinux".into(), "NULL".into()),
                ("WindowsAuxiliary".into(), "NULL".into()),
                ("LinuxAuxiliary".into(), "NULL".into()),
            ],
        }
    }

    fn set_attribute(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    fn set_element(mut self, tag: &str, text: &str) -> Self {
        match self.elements.iter_mut().find(|(k, _)| k == tag) {
            Some(entry) => entry.1 = text.to_string(),
            None => self.elements.push((tag.to_string(), text.to_string())),
        }
        self
    }

    pub fn compiler(self, value: &str) -> Self {
        self.set_attribute("Compiler", value)
    }

    pub fn ctype(self, value: &str) -> Self {
        self.set_attribute("CType", value)
    }

    pub fn build_name(self, value: &str) -> Self {
        self.set_element("BuildName", value)
    }

    pub fn main_file(self, value: &str) -> Self {
        self.set_element("CMainFile", value)
    }

    pub fn flags_windows(self, value: &str) -> Self {
        self.set_element("CFlagsWindows", value)
    }

    pub fn flags_linux(self, value: &str) -> Self {
        self.set_element("CFlagsLinux", value)
    }

    pub fn windows_auxiliary(self, value: &str) -> Self {
        self.set_element("WindowsAuxiliary", value)
    }

    pub fn linux_auxiliary(self, value: &str) -> Self {
        self.set_element("LinuxAuxiliary", value)
    }

    pub fn without_attribute(mut self, name: &str) -> Self {
        self.attributes.retain(|(k, _)| k != name);
        self
    }

    pub fn without_element(mut self, tag: &str) -> Self {
        self.elements.retain(|(k, _)| k != tag);
        self
    }

    /// Render the document as XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<GhostBuild");
        for (name, value) in &self.attributes {
            xml.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        xml.push_str(">\n");
        for (tag, text) in &self.elements {
            xml.push_str(&format!("    <{tag}>{}</{tag}>\n", escape(text)));
        }
        xml.push_str("</GhostBuild>\n");
        xml
    }
}

impl Default for BuildDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
