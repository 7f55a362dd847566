//! Menu tree with a single-open submenu state machine.
//!
//! A [`Menu`] is built every frame from a closure. Inside the closure, a
//! [`MenuScope`] hands out [`MenuItem`] and [`SubMenu`] slots; building either
//! outside a menu is an error, caught at build time rather than producing a
//! half-wired tree.
//!
//! The whole tree holds exactly one piece of internal state, the id of the
//! open submenu (see [`MenuMemory`](vela_ui::MenuMemory)). Activating a
//! submenu title toggles it; because there is a single scalar, opening one
//! submenu implicitly closes any other. Activating a leaf item fires the
//! menu's `on_select` callback and leaves the open state alone. The selected
//! set is owned by the application and passed in each frame; the menu only
//! reads it.

use std::collections::{BTreeSet, HashSet};

use log::warn;
use vela_ui::{Key, UiContext, UiError};

/// Memory key under which the per-frame menu build stack lives.
const BUILD_STACK_KEY: &str = "__vela_menu_build_stack";

/// Layout direction of a menu, which also selects its dismissal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuMode {
    /// Vertical sidebar-style menu. Stays open on outside clicks.
    #[default]
    Vertical,
    /// Horizontal menu-bar-style menu. An outside click closes the open
    /// submenu.
    Horizontal,
}

/// One in-progress `Menu::show` call.
///
/// Items and submenus built during the call write their activations here;
/// the menu applies them once the build closure returns.
#[derive(Default)]
struct MenuFrame {
    /// Open submenu at the start of the build, for rendering child views.
    open_submenu: Option<String>,
    /// Externally owned selection, read-only during the build.
    selected: BTreeSet<String>,
    /// Ids built so far, for duplicate detection.
    seen_ids: HashSet<String>,
    /// Leaf items activated this frame, in build order.
    pending_select: Vec<String>,
    /// Submenu titles activated this frame, in build order.
    pending_toggle: Vec<String>,
}

/// Stack of in-progress menu builds, stored in widget memory.
///
/// A stack rather than a single slot so menus can nest; items always attach
/// to the innermost menu being built.
#[derive(Default)]
struct MenuBuildStack {
    frames: Vec<MenuFrame>,
}

/// A leaf menu entry.
///
/// Activating it reports the item id through the menu's `on_select` callback.
/// It carries no open/close state of its own.
#[derive(Debug, Clone)]
pub struct MenuItem {
    id: String,
    label: Option<String>,
    disabled: bool,
}

impl MenuItem {
    /// Create an item with the given id. The label defaults to the id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            disabled: false,
        }
    }

    /// Set a display label distinct from the id.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Disable the item. Disabled items render but ignore activation.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Build the item into the innermost menu currently being built.
    ///
    /// Errors with [`UiError::ItemOutsideMenu`] when no menu build is in
    /// progress.
    pub fn view(self, ctx: &mut UiContext) -> Result<MenuNodeView, UiError> {
        let activated = !self.disabled && ctx.was_activated(&self.id);

        let frame = ctx
            .memory()
            .get_mut::<MenuBuildStack>(BUILD_STACK_KEY)
            .and_then(|stack| stack.frames.last_mut())
            .ok_or(UiError::ItemOutsideMenu {
                id: self.id.clone(),
            })?;

        if !frame.seen_ids.insert(self.id.clone()) {
            warn!("duplicate menu id {:?}; events will apply to every duplicate", self.id);
        }

        let selected = frame.selected.contains(&self.id);
        if activated {
            frame.pending_select.push(self.id.clone());
        }

        Ok(MenuNodeView::Item(ItemView {
            label: self.label.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            disabled: self.disabled,
            selected,
        }))
    }
}

/// A submenu entry: a title plus a child scope.
///
/// Activating the submenu (or its `<id>__title` widget) toggles it open or
/// closed. Children are built every frame regardless, so their ids stay
/// stable; the view's `open` flag tells the renderer whether to draw them.
#[derive(Debug, Clone)]
pub struct SubMenu {
    id: String,
    title: String,
    disabled: bool,
}

impl SubMenu {
    /// Create a submenu with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            disabled: false,
        }
    }

    /// Disable the submenu. A disabled submenu never toggles.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The widget id of the submenu's title row, e.g. `sub1__title`.
    pub fn title_widget_id(id: &str) -> String {
        format!("{id}__title")
    }

    /// Build the submenu and its children into the innermost menu.
    ///
    /// Errors with [`UiError::SubmenuOutsideMenu`] when no menu build is in
    /// progress.
    pub fn view(
        self,
        ctx: &mut UiContext,
        children: impl FnOnce(&mut MenuScope),
    ) -> Result<MenuNodeView, UiError> {
        let title_id = Self::title_widget_id(&self.id);
        let activated = !self.disabled
            && (ctx.was_activated(&self.id) || ctx.was_activated(&title_id));

        let open = {
            let frame = ctx
                .memory()
                .get_mut::<MenuBuildStack>(BUILD_STACK_KEY)
                .and_then(|stack| stack.frames.last_mut())
                .ok_or(UiError::SubmenuOutsideMenu {
                    id: self.id.clone(),
                })?;

            if !frame.seen_ids.insert(self.id.clone()) {
                warn!("duplicate menu id {:?}; events will apply to every duplicate", self.id);
            }
            if activated {
                frame.pending_toggle.push(self.id.clone());
            }
            frame.open_submenu.as_deref() == Some(self.id.as_str())
        };

        let nodes = {
            let mut scope = MenuScope {
                ctx,
                nodes: Vec::new(),
            };
            children(&mut scope);
            scope.nodes
        };

        Ok(MenuNodeView::Submenu(SubmenuView {
            id: self.id,
            title: self.title,
            disabled: self.disabled,
            open,
            children: nodes,
        }))
    }
}

/// Build scope handed to the closures of [`Menu::show`] and [`SubMenu::view`].
///
/// The scope is the only way to obtain it, so items and submenus added here
/// are structurally inside a menu.
pub struct MenuScope<'a> {
    ctx: &'a mut UiContext,
    nodes: Vec<MenuNodeView>,
}

impl MenuScope<'_> {
    /// Add a leaf item.
    pub fn item(&mut self, item: MenuItem) {
        let node = item
            .view(self.ctx)
            .expect("a menu frame is active inside a menu scope");
        self.nodes.push(node);
    }

    /// Add a submenu with its own child scope.
    pub fn submenu(&mut self, submenu: SubMenu, children: impl FnOnce(&mut MenuScope)) {
        let node = submenu
            .view(self.ctx, children)
            .expect("a menu frame is active inside a menu scope");
        self.nodes.push(node);
    }

    /// The underlying UI context, for embedding other components.
    pub fn ctx(&mut self) -> &mut UiContext {
        self.ctx
    }
}

/// A menu tree, rebuilt every frame.
///
/// ```ignore
/// let view = Menu::new("main")
///     .with_selected(["2"])
///     .on_select(|id| println!("selected {id}"))
///     .show(&mut ctx, |menu| {
///         menu.item(MenuItem::new("1"));
///         menu.item(MenuItem::new("2"));
///         menu.submenu(SubMenu::new("sub1", "More"), |sub| {
///             sub.item(MenuItem::new("3"));
///             sub.item(MenuItem::new("4"));
///         });
///     });
/// ```
pub struct Menu {
    id: String,
    mode: MenuMode,
    selected: BTreeSet<String>,
    on_select: Option<Box<dyn FnMut(&str)>>,
}

impl Menu {
    /// Create a menu with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mode: MenuMode::default(),
            selected: BTreeSet::new(),
            on_select: None,
        }
    }

    /// Set the layout mode.
    pub fn with_mode(mut self, mode: MenuMode) -> Self {
        self.mode = mode;
        self
    }

    /// Provide the externally owned selection for this frame.
    ///
    /// The menu reads it to flag selected items; it never writes it back.
    pub fn with_selected<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected.into_iter().map(Into::into).collect();
        self
    }

    /// Callback fired with the item id for every leaf activation this frame.
    pub fn on_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Build the menu for this frame and apply the activations it observed.
    ///
    /// Escape (any mode) and outside clicks (horizontal mode only) close the
    /// open submenu before the tree is built. Submenu toggles and item
    /// selections collected during the build are applied after it, and the
    /// returned view reflects the final open state.
    pub fn show(
        mut self,
        ctx: &mut UiContext,
        build: impl FnOnce(&mut MenuScope),
    ) -> MenuView {
        let dismiss = ctx.key_pressed(&self.id, Key::Escape)
            || (self.mode == MenuMode::Horizontal && ctx.clicked_outside(&self.id));
        if dismiss {
            ctx.memory().menu(self.id.clone()).close();
        }

        let open_submenu = ctx.memory().menu(self.id.clone()).open_submenu.clone();
        ctx.memory()
            .get_or_default::<MenuBuildStack>(BUILD_STACK_KEY)
            .frames
            .push(MenuFrame {
                open_submenu,
                selected: std::mem::take(&mut self.selected),
                ..MenuFrame::default()
            });

        let mut nodes = {
            let mut scope = MenuScope {
                ctx,
                nodes: Vec::new(),
            };
            build(&mut scope);
            scope.nodes
        };

        let frame = ctx
            .memory()
            .get_mut::<MenuBuildStack>(BUILD_STACK_KEY)
            .and_then(|stack| stack.frames.pop())
            .expect("the frame pushed above is still on the stack");

        for id in &frame.pending_toggle {
            ctx.memory().menu(self.id.clone()).toggle(id);
        }
        if let Some(callback) = self.on_select.as_mut() {
            for id in &frame.pending_select {
                callback(id);
            }
        }

        let open_submenu = ctx.memory().menu(self.id.clone()).open_submenu.clone();
        set_open_flags(&mut nodes, open_submenu.as_deref());

        MenuView {
            id: self.id,
            mode: self.mode,
            open_submenu,
            nodes,
        }
    }

    /// Close the open submenu of the menu with the given id, if any.
    pub fn close_submenu(ctx: &mut UiContext, menu_id: impl Into<String>) {
        ctx.memory().menu(menu_id.into()).close();
    }
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Rewrite submenu `open` flags to match the post-build open submenu.
fn set_open_flags(nodes: &mut [MenuNodeView], open: Option<&str>) {
    for node in nodes {
        if let MenuNodeView::Submenu(submenu) = node {
            submenu.open = open == Some(submenu.id.as_str());
            set_open_flags(&mut submenu.children, open);
        }
    }
}

/// One node of the built menu tree.
#[derive(Debug, Clone)]
pub enum MenuNodeView {
    /// A leaf item.
    Item(ItemView),
    /// A submenu with children.
    Submenu(SubmenuView),
}

/// Snapshot of a leaf item for the render collaborator.
#[derive(Debug, Clone)]
pub struct ItemView {
    /// The item's id (also its event-targeting widget id).
    pub id: String,
    /// Display label.
    pub label: String,
    /// Whether the item ignores activation.
    pub disabled: bool,
    /// Whether the item is in the externally owned selection.
    pub selected: bool,
}

/// Snapshot of a submenu for the render collaborator.
#[derive(Debug, Clone)]
pub struct SubmenuView {
    /// The submenu's id.
    pub id: String,
    /// Title shown on the submenu row.
    pub title: String,
    /// Whether the submenu ignores activation.
    pub disabled: bool,
    /// Whether this is the open submenu after this frame's events.
    pub open: bool,
    /// Child nodes, built whether or not the submenu is open.
    pub children: Vec<MenuNodeView>,
}

/// Snapshot of a whole menu tree for one frame.
#[derive(Debug, Clone)]
pub struct MenuView {
    /// The menu's id.
    pub id: String,
    /// Layout mode.
    pub mode: MenuMode,
    /// The single open submenu, if any.
    pub open_submenu: Option<String>,
    /// Top-level nodes in build order.
    pub nodes: Vec<MenuNodeView>,
}

impl MenuView {
    /// Find an item anywhere in the tree by id.
    pub fn item(&self, id: &str) -> Option<&ItemView> {
        fn find<'a>(nodes: &'a [MenuNodeView], id: &str) -> Option<&'a ItemView> {
            for node in nodes {
                match node {
                    MenuNodeView::Item(item) if item.id == id => return Some(item),
                    MenuNodeView::Item(_) => {}
                    MenuNodeView::Submenu(submenu) => {
                        if let Some(found) = find(&submenu.children, id) {
                            return Some(found);
                        }
                    }
                }
            }
            None
        }
        find(&self.nodes, id)
    }

    /// Find a submenu anywhere in the tree by id.
    pub fn submenu(&self, id: &str) -> Option<&SubmenuView> {
        fn find<'a>(nodes: &'a [MenuNodeView], id: &str) -> Option<&'a SubmenuView> {
            for node in nodes {
                if let MenuNodeView::Submenu(submenu) = node {
                    if submenu.id == id {
                        return Some(submenu);
                    }
                    if let Some(found) = find(&submenu.children, id) {
                        return Some(found);
                    }
                }
            }
            None
        }
        find(&self.nodes, id)
    }

    /// Whether the submenu with the given id is the open one.
    pub fn is_open(&self, id: &str) -> bool {
        self.open_submenu.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vela_ui::TargetedEvent;

    /// Build the reference tree: items 1 and 2, sub1 with items 3 and 4.
    fn build_tree(menu: &mut MenuScope) {
        menu.item(MenuItem::new("1"));
        menu.item(MenuItem::new("2"));
        menu.submenu(SubMenu::new("sub1", "More"), |sub| {
            sub.item(MenuItem::new("3"));
            sub.item(MenuItem::new("4"));
        });
    }

    fn frame(ctx: &mut UiContext, events: &[TargetedEvent]) {
        for event in events {
            ctx.push_event(event.clone());
        }
        ctx.begin_frame();
    }

    #[test]
    fn submenu_title_activation_toggles_open() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        let view = Menu::new("main").show(&mut ctx, build_tree);
        assert!(view.is_open("sub1"));
        assert!(view.submenu("sub1").unwrap().open);

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        let view = Menu::new("main").show(&mut ctx, build_tree);
        assert!(!view.is_open("sub1"));
        assert!(view.open_submenu.is_none());
    }

    #[test]
    fn title_widget_id_also_toggles() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("sub1__title")]);
        let view = Menu::new("main").show(&mut ctx, build_tree);
        assert!(view.is_open("sub1"));
    }

    #[test]
    fn only_one_submenu_open_at_a_time() {
        let mut ctx = UiContext::new();
        let two_subs = |menu: &mut MenuScope| {
            menu.submenu(SubMenu::new("sub1", "One"), |sub| {
                sub.item(MenuItem::new("a"));
            });
            menu.submenu(SubMenu::new("sub2", "Two"), |sub| {
                sub.item(MenuItem::new("b"));
            });
        };

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        let view = Menu::new("main").show(&mut ctx, two_subs);
        assert!(view.is_open("sub1"));

        frame(&mut ctx, &[TargetedEvent::click("sub2")]);
        let view = Menu::new("main").show(&mut ctx, two_subs);
        assert!(!view.is_open("sub1"));
        assert!(view.is_open("sub2"));
        assert!(!view.submenu("sub1").unwrap().open);
        assert!(view.submenu("sub2").unwrap().open);
    }

    #[test]
    fn leaf_activation_selects_without_changing_open_state() {
        let mut ctx = UiContext::new();
        let selected = Rc::new(RefCell::new(Vec::new()));

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        Menu::new("main").show(&mut ctx, build_tree);

        let sink = Rc::clone(&selected);
        frame(&mut ctx, &[TargetedEvent::click("3")]);
        let view = Menu::new("main")
            .on_select(move |id| sink.borrow_mut().push(id.to_string()))
            .show(&mut ctx, build_tree);

        assert_eq!(*selected.borrow(), vec!["3".to_string()]);
        // Selecting a leaf leaves the submenu open.
        assert!(view.is_open("sub1"));
    }

    #[test]
    fn top_level_leaf_activation_reports_id() {
        let mut ctx = UiContext::new();
        let selected = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&selected);
        frame(&mut ctx, &[TargetedEvent::click("2")]);
        let view = Menu::new("main")
            .on_select(move |id| sink.borrow_mut().push(id.to_string()))
            .show(&mut ctx, build_tree);

        assert_eq!(*selected.borrow(), vec!["2".to_string()]);
        assert!(view.open_submenu.is_none());
    }

    #[test]
    fn disabled_item_ignores_activation() {
        let mut ctx = UiContext::new();
        let selected = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&selected);
        frame(&mut ctx, &[TargetedEvent::click("1")]);
        Menu::new("main")
            .on_select(move |id| sink.borrow_mut().push(id.to_string()))
            .show(&mut ctx, |menu| {
                menu.item(MenuItem::new("1").with_disabled(true));
            });

        assert!(selected.borrow().is_empty());
    }

    #[test]
    fn disabled_submenu_never_toggles() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        let view = Menu::new("main").show(&mut ctx, |menu| {
            menu.submenu(SubMenu::new("sub1", "One").with_disabled(true), |sub| {
                sub.item(MenuItem::new("a"));
            });
        });

        assert!(view.open_submenu.is_none());
    }

    #[test]
    fn item_outside_menu_fails_fast() {
        let mut ctx = UiContext::new();
        ctx.begin_frame();

        let err = MenuItem::new("stray").view(&mut ctx).unwrap_err();
        assert!(matches!(err, UiError::ItemOutsideMenu { ref id } if id == "stray"));

        let err = SubMenu::new("stray-sub", "Oops")
            .view(&mut ctx, |_| {})
            .unwrap_err();
        assert!(matches!(err, UiError::SubmenuOutsideMenu { ref id } if id == "stray-sub"));
    }

    #[test]
    fn escape_closes_in_any_mode() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        Menu::new("main").show(&mut ctx, build_tree);

        frame(&mut ctx, &[TargetedEvent::key("main", Key::Escape)]);
        let view = Menu::new("main").show(&mut ctx, build_tree);
        assert!(view.open_submenu.is_none());
    }

    #[test]
    fn outside_click_closes_only_in_horizontal_mode() {
        let mut ctx = UiContext::new();

        // Vertical: outside click is ignored.
        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        Menu::new("main").show(&mut ctx, build_tree);
        frame(&mut ctx, &[TargetedEvent::pointer_outside("main")]);
        let view = Menu::new("main").show(&mut ctx, build_tree);
        assert!(view.is_open("sub1"));

        // Horizontal: outside click closes.
        frame(&mut ctx, &[TargetedEvent::pointer_outside("main")]);
        let view = Menu::new("main")
            .with_mode(MenuMode::Horizontal)
            .show(&mut ctx, build_tree);
        assert!(view.open_submenu.is_none());
    }

    #[test]
    fn selection_is_read_from_the_external_set() {
        let mut ctx = UiContext::new();
        ctx.begin_frame();

        let view = Menu::new("main")
            .with_selected(["2", "3"])
            .show(&mut ctx, build_tree);

        assert!(!view.item("1").unwrap().selected);
        assert!(view.item("2").unwrap().selected);
        assert!(view.item("3").unwrap().selected);
        assert!(!view.item("4").unwrap().selected);
    }

    #[test]
    fn activation_does_not_write_the_selection() {
        let mut ctx = UiContext::new();

        // The external set says only "1"; clicking "2" reports it but the
        // view still reflects the set the application passed in.
        frame(&mut ctx, &[TargetedEvent::click("2")]);
        let view = Menu::new("main")
            .with_selected(["1"])
            .on_select(|_| {})
            .show(&mut ctx, build_tree);

        assert!(view.item("1").unwrap().selected);
        assert!(!view.item("2").unwrap().selected);
    }

    #[test]
    fn open_state_survives_rebuilds_without_events() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        Menu::new("main").show(&mut ctx, build_tree);

        for _ in 0..3 {
            frame(&mut ctx, &[]);
            let view = Menu::new("main").show(&mut ctx, build_tree);
            assert!(view.is_open("sub1"));
        }
    }

    #[test]
    fn closed_submenu_still_builds_children() {
        let mut ctx = UiContext::new();
        ctx.begin_frame();

        let view = Menu::new("main").show(&mut ctx, build_tree);
        let sub = view.submenu("sub1").unwrap();
        assert!(!sub.open);
        assert_eq!(sub.children.len(), 2);
        assert!(view.item("3").is_some());
    }

    #[test]
    fn duplicate_ids_build_but_are_tolerated() {
        let mut ctx = UiContext::new();
        ctx.begin_frame();

        let view = Menu::new("main").show(&mut ctx, |menu| {
            menu.item(MenuItem::new("1"));
            menu.item(MenuItem::new("1"));
        });

        assert_eq!(view.nodes.len(), 2);
    }

    #[test]
    fn close_submenu_clears_the_open_state() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("sub1")]);
        Menu::new("main").show(&mut ctx, build_tree);

        Menu::close_submenu(&mut ctx, "main");
        frame(&mut ctx, &[]);
        let view = Menu::new("main").show(&mut ctx, build_tree);
        assert!(view.open_submenu.is_none());
    }

    #[test]
    fn item_label_defaults_to_id() {
        let mut ctx = UiContext::new();
        ctx.begin_frame();

        let view = Menu::new("main").show(&mut ctx, |menu| {
            menu.item(MenuItem::new("1"));
            menu.item(MenuItem::new("2").with_label("Second"));
        });

        assert_eq!(view.item("1").unwrap().label, "1");
        assert_eq!(view.item("2").unwrap().label, "Second");
    }

    #[test]
    fn menus_can_nest_without_crosstalk() {
        let mut ctx = UiContext::new();

        frame(&mut ctx, &[TargetedEvent::click("inner-sub")]);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);

        let outer = Menu::new("outer").show(&mut ctx, |menu| {
            menu.item(MenuItem::new("outer-item"));
            let inner = Menu::new("inner")
                .on_select({
                    let sink = Rc::clone(&sink);
                    move |id| sink.borrow_mut().push(id.to_string())
                })
                .show(menu.ctx(), |inner| {
                    inner.submenu(SubMenu::new("inner-sub", "Nested"), |sub| {
                        sub.item(MenuItem::new("deep"));
                    });
                });
            assert!(inner.is_open("inner-sub"));
        });

        // The inner menu's toggle is invisible to the outer menu.
        assert!(outer.open_submenu.is_none());
        assert!(selected.borrow().is_empty());
    }
}
