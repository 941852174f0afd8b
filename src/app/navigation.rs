use super::menu::{MenuKind, MenuNode, COVER_FLOW_ID, SIGN_IN_ID, SIGN_OUT_ID};

/// What selecting the highlighted entry should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    SignIn,
    SignOut,
    /// Remote-backed menu that has not been loaded yet.
    Fetch { index: usize, id: String, label: String },
    Descend(usize),
    Song(usize),
    CoverFlow,
    Nothing,
}

/// Menu stack + selection cursor 🧭
///
/// The stack is stored as child indices from the root, so the root is always
/// present and can never be popped.
#[derive(Debug, Clone)]
pub struct NavigationState {
    root: MenuNode,
    path: Vec<usize>,
    selection: usize,
}

impl NavigationState {
    pub fn new(root: MenuNode) -> Self {
        Self {
            root,
            path: Vec::new(),
            selection: 0,
        }
    }

    pub fn root(&self) -> &MenuNode {
        &self.root
    }

    /// Number of levels on the stack, root included.
    pub fn depth(&self) -> usize {
        self.path.len() + 1
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn current(&self) -> &MenuNode {
        // path only ever holds indices that resolved when pushed
        self.node_at(&self.path).unwrap_or(&self.root)
    }

    pub fn selected(&self) -> Option<&MenuNode> {
        self.current().children().get(self.selection)
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&MenuNode> {
        let mut node = &self.root;
        for &idx in path {
            node = node.children().get(idx)?;
        }
        Some(node)
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut MenuNode> {
        let mut node = &mut self.root;
        for &idx in path {
            node = node.children_mut()?.get_mut(idx)?;
        }
        Some(node)
    }

    /// Move the cursor one step, wrapping at both ends.
    pub fn scroll(&mut self, direction: i32) {
        let count = self.current().child_count();
        if count == 0 {
            return;
        }
        let count = count as i64;
        let next = (self.selection as i64 + direction.signum() as i64).rem_euclid(count);
        self.selection = next as usize;
    }

    /// Classify the highlighted entry without changing any state.
    pub fn resolve_selection(&self) -> Selection {
        let Some(item) = self.selected() else {
            return Selection::Nothing;
        };
        let index = self.selection;

        if item.has_id(SIGN_IN_ID) {
            return Selection::SignIn;
        }
        if item.has_id(SIGN_OUT_ID) {
            return Selection::SignOut;
        }

        match item.kind {
            MenuKind::Menu => match (&item.external_id, item.children.is_unfetched()) {
                (Some(id), true) => Selection::Fetch {
                    index,
                    id: id.clone(),
                    label: item.label.clone(),
                },
                _ => Selection::Descend(index),
            },
            MenuKind::Song => Selection::Song(index),
            MenuKind::Action if item.has_id(COVER_FLOW_ID) => Selection::CoverFlow,
            MenuKind::Action => Selection::Nothing,
        }
    }

    /// Push the child at `index` of the current node.
    pub fn descend(&mut self, index: usize) -> bool {
        if index >= self.current().child_count() {
            return false;
        }
        self.path.push(index);
        self.selection = 0;
        true
    }

    /// Pop one level. The root stays.
    pub fn pop(&mut self) -> bool {
        if self.path.pop().is_some() {
            self.selection = 0;
            true
        } else {
            false
        }
    }

    /// Path identifiers of every level below the root.
    pub fn key_path(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.path.len());
        let mut node = &self.root;
        for &idx in &self.path {
            match node.children().get(idx) {
                Some(child) => {
                    keys.push(child.path_key().to_string());
                    node = child;
                }
                None => break,
            }
        }
        keys
    }

    /// Swap in a rebuilt tree and walk back down to the same place by
    /// identifier. Levels that no longer exist are dropped.
    pub fn replace_root(&mut self, root: MenuNode) {
        let keys = self.key_path();
        let selected_key = self.selected().map(|n| n.path_key().to_string());
        self.root = root;
        self.path.clear();

        let mut node = &self.root;
        // an unloaded level cannot be entered, park on its entry instead
        let mut parked_on = None;
        for key in &keys {
            let Some(idx) = node.children().iter().position(|c| c.path_key() == key) else {
                break;
            };
            if node.children()[idx].children.is_unfetched() {
                parked_on = Some(idx);
                break;
            }
            self.path.push(idx);
            node = &node.children()[idx];
        }

        let restored = self.path.len() == keys.len();
        self.selection = match parked_on {
            Some(idx) => idx,
            None if restored => selected_key
                .and_then(|k| node.children().iter().position(|c| c.path_key() == k))
                .unwrap_or(0),
            None => 0,
        };
    }
}
