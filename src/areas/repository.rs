use crate::artifacts::git::Git;
use crate::artifacts::graph_log::GraphLog;
use std::cell::RefCell;
use std::path::Path;

/// The Git repository the activity graph is drawn into.
///
/// Holds the absolute repository path, the `graph.md` log writer and the
/// subprocess driver for the real `git` binary. All user-visible output goes
/// through the injected writer so commands stay testable.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    graph_log: GraphLog,
    git: Git,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        // Lexical resolution only: the path is not required to exist here,
        // git itself reports a missing repository when first invoked.
        let path = std::path::absolute(Path::new(path))?;

        let graph_log = GraphLog::new(path.clone().into_boxed_path());
        let git = Git::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            graph_log,
            git,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> std::cell::RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn graph_log(&self) -> &GraphLog {
        &self.graph_log
    }

    pub fn git(&self) -> &Git {
        &self.git
    }
}
