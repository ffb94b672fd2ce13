use std::fmt;
use std::path::PathBuf;

/// Language/framework a test class was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    /// XCTest classes in `*Tests.swift` files
    Swift,
    /// xUnit classes in `*Tests.cs` files
    CSharp,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::Swift => write!(f, "Swift"),
            Framework::CSharp => write!(f, "C#"),
        }
    }
}

/// A single test class pulled out of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClass {
    /// Class name, or the file stem when no class declaration matched
    pub name: String,
    /// Source file the class came from
    pub file_path: PathBuf,
    /// Test method names in file order, duplicates preserved
    pub test_methods: Vec<String>,
    /// Module imports / using directives in file order
    pub imports: Vec<String>,
    pub framework: Framework,
}

impl TestClass {
    pub fn new(name: impl Into<String>, file_path: PathBuf, framework: Framework) -> Self {
        Self {
            name: name.into(),
            file_path,
            test_methods: Vec::new(),
            imports: Vec::new(),
            framework,
        }
    }
}

/// Counters accumulated while scanning one corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusScanStats {
    /// Files matching the corpus suffix
    pub total_files: usize,
    /// Classes extracted (one per readable file)
    pub total_classes: usize,
    /// Files that produced a class with no test methods
    pub empty_files: usize,
    /// Files skipped because they could not be read
    pub skipped_files: usize,
    pub skipped_file_paths: Vec<PathBuf>,
}

/// Every test class found under one corpus root.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub framework: Framework,
    /// Extraction order follows the sorted file list
    pub classes: Vec<TestClass>,
    pub stats: CorpusScanStats,
}

impl Corpus {
    /// Corpus with no classes, used when a root is absent or unreadable.
    pub fn empty(framework: Framework) -> Self {
        Self {
            framework,
            classes: Vec::new(),
            stats: CorpusScanStats::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
