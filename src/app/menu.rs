/// Reserved ids carried by action entries.
pub const SIGN_IN_ID: &str = "signin";
pub const SIGN_OUT_ID: &str = "signout";
pub const COVER_FLOW_ID: &str = "cover_flow";
pub const PLAYLISTS_ID: &str = "playlists";

/// Label shown in the playlists menu until the catalog answers.
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Menu,
    Song,
    Action,
}

/// Child list of a menu entry 📂
///
/// `Unfetched` marks a remote-backed menu whose items have not been loaded
/// yet. `Loaded(vec![])` is a menu that is genuinely empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Unfetched,
    Loaded(Vec<MenuNode>),
}

impl Children {
    pub fn as_slice(&self) -> &[MenuNode] {
        match self {
            Children::Unfetched => &[],
            Children::Loaded(items) => items,
        }
    }

    pub fn is_unfetched(&self) -> bool {
        matches!(self, Children::Unfetched)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub label: String,
    pub kind: MenuKind,
    pub external_id: Option<String>,
    pub image_url: Option<String>,
    pub children: Children,
}

impl MenuNode {
    pub fn menu(label: &str, children: Vec<MenuNode>) -> Self {
        Self {
            label: label.to_string(),
            kind: MenuKind::Menu,
            external_id: None,
            image_url: None,
            children: Children::Loaded(children),
        }
    }

    /// A menu backed by the catalog, loaded on first selection.
    pub fn remote_menu(label: &str, external_id: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: MenuKind::Menu,
            external_id: Some(external_id.to_string()),
            image_url: None,
            children: Children::Unfetched,
        }
    }

    pub fn song(label: &str, external_id: &str, image_url: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            kind: MenuKind::Song,
            external_id: Some(external_id.to_string()),
            image_url,
            children: Children::Loaded(Vec::new()),
        }
    }

    pub fn action(label: &str, id: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: MenuKind::Action,
            external_id: Some(id.to_string()),
            image_url: None,
            children: Children::Loaded(Vec::new()),
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        self.children.as_slice()
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<MenuNode>> {
        match &mut self.children {
            Children::Unfetched => None,
            Children::Loaded(items) => Some(items),
        }
    }

    /// Identifier used to find this entry again after the tree is rebuilt.
    pub fn path_key(&self) -> &str {
        self.external_id.as_deref().unwrap_or(&self.label)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.external_id.as_deref() == Some(id)
    }
}

/// The menu tree a fresh session starts from.
pub fn initial_menu(device_name: &str) -> MenuNode {
    MenuNode::menu(
        device_name,
        vec![
            MenuNode::action("Cover Flow", COVER_FLOW_ID),
            MenuNode::menu(
                "Music",
                vec![
                    MenuNode {
                        external_id: Some(PLAYLISTS_ID.to_string()),
                        ..MenuNode::menu("Playlists", vec![MenuNode::menu(LOADING_LABEL, Vec::new())])
                    },
                    MenuNode::menu("Artists", Vec::new()),
                    MenuNode::menu("Songs", Vec::new()),
                ],
            ),
            MenuNode::menu(
                "Settings",
                vec![
                    MenuNode::action("Sign In", SIGN_IN_ID),
                    MenuNode::action("Sign Out", SIGN_OUT_ID),
                ],
            ),
        ],
    )
}

/// Builds the signed-in tree: playlists spliced under Music → Playlists and
/// the sign-in entry relabeled with the account owner.
pub fn signed_in_menu(device_name: &str, playlists: Vec<MenuNode>, user_name: Option<&str>) -> MenuNode {
    let mut root = initial_menu(device_name);
    let Some(items) = root.children_mut() else {
        return root;
    };

    if let Some(music) = items.iter_mut().find(|n| n.label == "Music") {
        if let Some(playlists_menu) = music
            .children_mut()
            .and_then(|c| c.iter_mut().find(|n| n.has_id(PLAYLISTS_ID)))
        {
            playlists_menu.label = "My Playlists".to_string();
            playlists_menu.children = Children::Loaded(playlists);
        }
    }

    if let Some(settings) = items.iter_mut().find(|n| n.label == "Settings") {
        if let Some(sign_in) = settings
            .children_mut()
            .and_then(|c| c.iter_mut().find(|n| n.has_id(SIGN_IN_ID)))
        {
            let first_name = user_name
                .and_then(|n| n.split_whitespace().next())
                .unwrap_or("");
            sign_in.label = format!("Signed in as {}", first_name).trim_end().to_string();
        }
    }

    root
}
