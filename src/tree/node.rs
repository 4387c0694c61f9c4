//! 通用语法树存储
//!
//! 基于 arena 的有序树：每个节点携带种类标签、有序子节点列表与父指针。
//! 树本身对节点语义一无所知，表达式层通过视图解释节点。
//! 节点标识加上结构修订号构成解析缓存的键：任何结构编辑都会递增修订号，
//! 使旧键不再命中，等价于整代失效。

use crate::core::types::SyntaxKind;
use uuid::Uuid;

/// 节点标识（arena 下标）
///
/// 仅在所属树内有意义；用失效的标识访问树属于调用方编程错误，
/// 会在下标越界时直接 panic。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// arena 下标
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 解析缓存键：树标识 + 节点标识 + 结构修订号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub tree: Uuid,
    pub node: NodeId,
    pub revision: u64,
}

/// 节点数据
#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// 仅叶子 token 持有源文本
    text: Option<String>,
}

/// 通用语法树
#[derive(Debug)]
pub struct SyntaxTree {
    id: Uuid,
    revision: u64,
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// 创建只含一个根节点的树
    pub fn new(root_kind: SyntaxKind) -> Self {
        SyntaxTree {
            id: Uuid::new_v4(),
            revision: 0,
            nodes: vec![NodeData {
                kind: root_kind,
                parent: None,
                children: Vec::new(),
                text: None,
            }],
        }
    }

    /// 树标识
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 当前结构修订号
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 根节点
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// 已分配的节点数（含游离节点）
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 树是否只有根节点
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    /// 节点种类
    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    /// 父节点
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// 有序子节点列表
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// 第一个子节点
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    /// 最后一个子节点
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// token 叶子的源文本
    pub fn token_text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    /// 节点在当前修订下的缓存键
    pub fn node_key(&self, id: NodeId) -> NodeKey {
        NodeKey {
            tree: self.id,
            node: id,
            revision: self.revision,
        }
    }

    /// 追加一个内部节点作为 parent 的最后一个子节点
    pub fn add_node(&mut self, parent: NodeId, kind: SyntaxKind) -> NodeId {
        let id = self.alloc(kind, None);
        self.attach_last(parent, id);
        id
    }

    /// 追加一个 token 叶子作为 parent 的最后一个子节点
    pub fn add_token(&mut self, parent: NodeId, kind: SyntaxKind, text: &str) -> NodeId {
        let id = self.alloc(kind, Some(text.to_string()));
        self.attach_last(parent, id);
        id
    }

    /// 分配一个游离的内部节点（不挂接），供编辑操作使用
    pub fn orphan_node(&mut self, kind: SyntaxKind) -> NodeId {
        self.alloc(kind, None)
    }

    /// 分配一个游离的 token 叶子（不挂接），供编辑操作使用
    pub fn orphan_token(&mut self, kind: SyntaxKind, text: &str) -> NodeId {
        self.alloc(kind, Some(text.to_string()))
    }

    fn alloc(&mut self, kind: SyntaxKind, text: Option<String>) -> NodeId {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "syntax tree node arena exhausted"
        );
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
            text,
        });
        id
    }

    fn attach_last(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        self.bump_revision();
    }

    pub(crate) fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        self.node_mut(child).parent = parent;
    }

    pub(crate) fn children_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        &mut self.node_mut(id).children
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_root_only() {
        let tree = SyntaxTree::new(SyntaxKind::BinaryExpression);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.kind(tree.root()), SyntaxKind::BinaryExpression);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.revision(), 0);
    }

    #[test]
    fn test_add_node_links_parent_and_children() {
        let mut tree = SyntaxTree::new(SyntaxKind::BinaryExpression);
        let root = tree.root();
        let left = tree.add_node(root, SyntaxKind::LiteralExpression);
        let op = tree.add_token(root, SyntaxKind::Plus, "+");
        let right = tree.add_node(root, SyntaxKind::LiteralExpression);

        assert_eq!(tree.children(root), &[left, op, right]);
        assert_eq!(tree.parent(left), Some(root));
        assert_eq!(tree.first_child(root), Some(left));
        assert_eq!(tree.last_child(root), Some(right));
        assert_eq!(tree.token_text(op), Some("+"));
        assert_eq!(tree.token_text(left), None);
    }

    #[test]
    fn test_construction_bumps_revision() {
        let mut tree = SyntaxTree::new(SyntaxKind::BinaryExpression);
        let before = tree.revision();
        tree.add_node(tree.root(), SyntaxKind::LiteralExpression);
        assert!(tree.revision() > before);
    }

    #[test]
    fn test_node_key_tracks_revision() {
        let mut tree = SyntaxTree::new(SyntaxKind::BinaryExpression);
        let root = tree.root();
        let key_before = tree.node_key(root);
        tree.add_node(root, SyntaxKind::LiteralExpression);
        let key_after = tree.node_key(root);

        assert_eq!(key_before.tree, key_after.tree);
        assert_eq!(key_before.node, key_after.node);
        assert_ne!(key_before, key_after);
    }

    #[test]
    fn test_orphan_nodes_stay_detached() {
        let mut tree = SyntaxTree::new(SyntaxKind::BinaryExpression);
        let orphan = tree.orphan_token(SyntaxKind::Plus, "+");
        assert_eq!(tree.parent(orphan), None);
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn test_distinct_trees_have_distinct_identity() {
        let a = SyntaxTree::new(SyntaxKind::BinaryExpression);
        let b = SyntaxTree::new(SyntaxKind::BinaryExpression);
        assert_ne!(a.id(), b.id());
        assert_ne!(a.node_key(a.root()), b.node_key(b.root()));
    }
}
