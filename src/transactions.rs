use std::{fs, marker::PhantomData, path::PathBuf};

/// Undo step for something created during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RollbackOperation {
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
}
/// A run in progress: operations are still being registered, and dropping it (for
/// example while an error propagates through `?`) rolls everything back.
pub struct Active;
/// A run that finished: the registered operations were forgotten and nothing is undone.
pub struct Committed;
/// A run that was given up on: the registered operations are kept and undone on drop.
pub struct Canceled;
/// Tells a transaction whether it should roll back when dropped.
///
/// The answer is fixed per state at compile time, so a [`Transaction<Committed>`] can
/// never remove anything, whatever happens after the commit.
pub trait TransactionState {
    const SHOULD_ROLLBACK: bool;
}
impl TransactionState for Active {
    const SHOULD_ROLLBACK: bool = true;
}
impl TransactionState for Committed {
    const SHOULD_ROLLBACK: bool = false;
}
impl TransactionState for Canceled {
    const SHOULD_ROLLBACK: bool = true;
}
/// Tracks what an asset preparation run created so a failed run leaves no partial output.
///
/// Only register paths the run created itself. A directory that was already there or
/// an icon being overwritten must never end up in here, otherwise rollback would delete
/// user data.
///
/// - `Transaction<Active>` collects [`RollbackOperation`]s while the run proceeds.
/// - `.commit()` forgets them.
/// - `.cancel()` keeps them; the returned `Transaction<Canceled>` undoes them when dropped.
///
/// Operations are undone in reverse registration order.
pub struct Transaction<State: TransactionState> {
    rollback_operations: Vec<RollbackOperation>,
    state: PhantomData<State>,
}
impl Transaction<Active> {
    pub fn new() -> Self {
        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }

    /// Registers the undo step for something this run just created.
    pub fn add_operation(&mut self, operation: RollbackOperation) {
        self.rollback_operations.push(operation);
    }

    /// Finalizes the run, clearing every registered operation.
    ///
    /// The returned [`Transaction<Committed>`] does nothing when dropped.
    pub fn commit(mut self) -> Transaction<Committed> {
        self.rollback_operations.clear();

        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }

    /// Gives up on the run while keeping the registered operations.
    ///
    /// Dropping the returned [`Transaction<Canceled>`] removes the created files and
    /// directories, newest first.
    pub fn cancel(mut self) -> Transaction<Canceled> {
        let rollback_operations = std::mem::take(&mut self.rollback_operations);

        Transaction {
            rollback_operations,
            state: PhantomData,
        }
    }
}
/// Undoes pending operations for states that roll back.
///
/// Removal errors are ignored. A path may already be gone by the time it is undone.
impl<S: TransactionState> Drop for Transaction<S> {
    fn drop(&mut self) {
        if S::SHOULD_ROLLBACK && !self.rollback_operations.is_empty() {
            log::debug!("rolling back {} operation(s)", self.rollback_operations.len());
            while let Some(operation) = self.rollback_operations.pop() {
                match operation {
                    RollbackOperation::RemoveDir(path) => {
                        log::debug!("removing dir: {}", path.display());
                        let _ = fs::remove_dir_all(&path);
                    }
                    RollbackOperation::RemoveFile(path) => {
                        log::debug!("removing file: {}", path.display());
                        let _ = fs::remove_file(&path);
                    }
                }
            }
        } else if !S::SHOULD_ROLLBACK {
            log::debug!("committing transaction");
        }
    }
}
