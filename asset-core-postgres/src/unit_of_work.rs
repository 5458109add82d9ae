use sqlx::{Postgres, Transaction};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one open database transaction.
///
/// Every repository participating in a unit of work clones the handle and
/// runs its statements against the same transaction, so a state change and
/// the audit entries documenting it commit or roll back together. Whoever
/// opened the unit of work calls `commit` or `rollback` exactly once;
/// dropping the handle without committing rolls the transaction back.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut tx = self.tx.lock().await;
        match tx.take() {
            Some(transaction) => {
                transaction.commit().await?;
                Ok(())
            }
            None => Err("Transaction has been consumed".into()),
        }
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut tx = self.tx.lock().await;
        match tx.take() {
            Some(transaction) => {
                transaction.rollback().await?;
                Ok(())
            }
            None => Err("Transaction has been consumed".into()),
        }
    }
}
