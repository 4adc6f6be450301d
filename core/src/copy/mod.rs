//! Node duplication.
//!
//! The copy gets a candidate name derived from the source name and exactly
//! one fresh code from the code generator. Name uniqueness is best effort;
//! the code generator is the authority on identity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::menu::{Position, TargetNode, TaskFlag};
use crate::services::TaskCodeGenerator;

/// Codes requested per copy.
pub const COPY_CODE_BATCH: usize = 1;

static NAME_SEQ: AtomicU64 = AtomicU64::new(0);

/// `"<name>_<suffix>"` where the suffix never repeats within this process.
pub fn duplicate_name(source_name: &str) -> String {
    let seq = NAME_SEQ.fetch_add(1, Ordering::Relaxed);
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{source_name}_{}{seq:x}", &random[..8])
}

/// Everything the host needs to insert the duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRequest {
    pub generated_name: String,
    pub new_code: i64,
    pub source_code: i64,
    pub task_type: String,
    pub flag: TaskFlag,
    pub offset_position: Position,
}

/// Values captured from the menu at click time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySource {
    pub code: i64,
    pub task_type: String,
    pub task_name: String,
    pub flag: TaskFlag,
    pub position: Position,
}

impl CopySource {
    pub fn capture(node: &TargetNode, position: Position) -> Self {
        Self {
            code: node.code,
            task_type: node.task_type.clone(),
            task_name: node.task_name.clone(),
            flag: node.flag,
            position,
        }
    }
}

#[derive(Clone)]
pub struct DuplicationService {
    generator: Arc<dyn TaskCodeGenerator>,
    offset: Position,
}

impl DuplicationService {
    pub fn new(generator: Arc<dyn TaskCodeGenerator>, offset: Position) -> Self {
        Self { generator, offset }
    }

    pub async fn prepare(
        &self,
        source: CopySource,
        project_code: i64,
    ) -> Result<CopyRequest, MenuError> {
        let generated_name = duplicate_name(&source.task_name);
        tracing::debug!(
            target: "dagmenu.copy",
            stage = "copy.codes.in",
            service = self.generator.name(),
            project_code,
            source_code = source.code
        );

        let codes = self
            .generator
            .generate_task_codes(COPY_CODE_BATCH, project_code)
            .await
            .map_err(|source| MenuError::CodeGeneration {
                service: self.generator.name().to_string(),
                source,
            })?;
        let Some(&new_code) = codes.first() else {
            return Err(MenuError::EmptyCodeBatch {
                service: self.generator.name().to_string(),
            });
        };

        tracing::debug!(
            target: "dagmenu.copy",
            stage = "copy.codes.out",
            new_code,
            name = %generated_name
        );

        Ok(CopyRequest {
            generated_name,
            new_code,
            source_code: source.code,
            task_type: source.task_type,
            flag: source.flag,
            offset_position: source.position.offset(self.offset),
        })
    }
}
