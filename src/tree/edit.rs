//! 结构编辑操作
//!
//! 树的唯一变更入口。每次成功的编辑都递增结构修订号，使解析缓存中
//! 以旧修订号为键的条目全部失效；失败的编辑不改变树，也不递增修订号。

use super::node::{NodeId, SyntaxTree};
use crate::core::error::{SyntaxResult, TreeError};

impl SyntaxTree {
    /// 把游离节点 child 插入为 parent 的第 position 个子节点
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        position: usize,
        child: NodeId,
    ) -> SyntaxResult<()> {
        if self.parent(child).is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        let len = self.children(parent).len();
        if position > len {
            return Err(TreeError::PositionOutOfBounds { position, len });
        }
        if self.is_self_or_ancestor_of(child, parent) {
            return Err(TreeError::CyclicAttachment(child));
        }

        self.set_parent(child, Some(parent));
        self.children_mut(parent).insert(position, child);
        self.bump_revision();
        Ok(())
    }

    /// 把 child 从 parent 下摘除，变为游离节点（存储不回收）
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> SyntaxResult<()> {
        let position = self
            .children(parent)
            .iter()
            .position(|&c| c == child)
            .ok_or(TreeError::NotAChild { parent, child })?;

        self.children_mut(parent).remove(position);
        self.set_parent(child, None);
        self.bump_revision();
        Ok(())
    }

    /// 用游离节点 replacement 原位替换 parent 下的 child
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        replacement: NodeId,
    ) -> SyntaxResult<()> {
        if self.parent(replacement).is_some() {
            return Err(TreeError::AlreadyAttached(replacement));
        }
        let position = self
            .children(parent)
            .iter()
            .position(|&c| c == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        if self.is_self_or_ancestor_of(replacement, parent) {
            return Err(TreeError::CyclicAttachment(replacement));
        }

        self.children_mut(parent)[position] = replacement;
        self.set_parent(replacement, Some(parent));
        self.set_parent(child, None);
        self.bump_revision();
        Ok(())
    }

    /// node 是否为 target 本身或其祖先
    fn is_self_or_ancestor_of(&self, node: NodeId, target: NodeId) -> bool {
        let mut current = Some(target);
        while let Some(id) = current {
            if id == node {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
