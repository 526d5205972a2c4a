//! Static catalog of installable shadcn/ui components

/// A component offered for installation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentOption {
    /// Human-readable name shown in prompts
    pub name: &'static str,
    /// Canonical identifier passed to `shadcn add`
    pub value: &'static str,
    /// One-line description shown next to the name
    pub description: &'static str,
}

const fn option(
    name: &'static str,
    value: &'static str,
    description: &'static str,
) -> ComponentOption {
    ComponentOption {
        name,
        value,
        description,
    }
}

/// Selection value that stands for "the whole catalog"
pub const ALL_SHORTCUT: &str = "all";

/// Known components, in installation order
pub const COMPONENTS: &[ComponentOption] = &[
    option("Accordion", "accordion", "Collapsible content sections"),
    option("Alert", "alert", "Important messages and notifications"),
    option("Alert Dialog", "alert-dialog", "Modal dialogs for important actions"),
    option("Aspect Ratio", "aspect-ratio", "Maintain responsive aspect ratios"),
    option("Avatar", "avatar", "User profile images"),
    option("Badge", "badge", "Small status indicators"),
    option("Breadcrumb", "breadcrumb", "Navigation breadcrumbs"),
    option("Button", "button", "Interactive buttons with variants"),
    option("Calendar", "calendar", "Date selection component"),
    option("Card", "card", "Content containers with headers"),
    option("Carousel", "carousel", "Image or content slideshows"),
    option("Chart", "chart", "Data visualization charts"),
    option("Checkbox", "checkbox", "Boolean input controls"),
    option("Collapsible", "collapsible", "Expandable content sections"),
    option("Command", "command", "Command palette interface"),
    option("Context Menu", "context-menu", "Right-click context menus"),
    option("Dialog", "dialog", "Modal overlay dialogs"),
    option("Drawer", "drawer", "Slide-out side panels"),
    option("Dropdown Menu", "dropdown-menu", "Toggleable menu lists"),
    option("React Hook Form", "form", "Form validation and handling"),
    option("Hover Card", "hover-card", "Rich preview cards"),
    option("Input", "input", "Text input fields"),
    option("Input OTP", "input-otp", "One-time password input"),
    option("Label", "label", "Form field labels"),
    option("Menubar", "menubar", "Horizontal navigation menus"),
    option("Navigation Menu", "navigation-menu", "Multi-level navigation"),
    option("Pagination", "pagination", "Page navigation controls"),
    option("Popover", "popover", "Floating content containers"),
    option("Progress", "progress", "Loading and progress indicators"),
    option("Radio Group", "radio-group", "Single selection controls"),
    option("Resizable", "resizable", "Resizable panels and layouts"),
    option("Scroll Area", "scroll-area", "Custom scrollable areas"),
    option("Select", "select", "Dropdown selection controls"),
    option("Separator", "separator", "Visual content dividers"),
    option("Sheet", "sheet", "Slide-out panels"),
    option("Sidebar", "sidebar", "Sidebar navigation component"),
    option("Skeleton", "skeleton", "Loading placeholders"),
    option("Slider", "slider", "Range input controls"),
    option("Sonner", "sonner", "Toast notifications"),
    option("Switch", "switch", "Toggle switch controls"),
    option("Table", "table", "Data table components"),
    option("Tabs", "tabs", "Tabbed content sections"),
    option("Textarea", "textarea", "Multi-line text inputs"),
    option("Toggle", "toggle", "Toggle button controls"),
    option("Toggle Group", "toggle-group", "Grouped toggle buttons"),
    option("Tooltip", "tooltip", "Hover information displays"),
];

/// Canonical identifiers of every catalog component, in catalog order
pub fn all_values() -> Vec<String> {
    COMPONENTS.iter().map(|c| c.value.to_string()).collect()
}

/// Look up a component by its canonical identifier
pub fn find(value: &str) -> Option<&'static ComponentOption> {
    COMPONENTS.iter().find(|c| c.value == value)
}

/// Expand a raw selection: if it contains [`ALL_SHORTCUT`] the whole catalog
/// is returned, otherwise the selection is returned unchanged.
pub fn expand_selection(selected: Vec<String>) -> Vec<String> {
    if selected.iter().any(|s| s == ALL_SHORTCUT) {
        all_values()
    } else {
        selected
    }
}

/// Selected identifiers that are not in the catalog
pub fn unknown_components(selected: &[String]) -> Vec<&str> {
    selected
        .iter()
        .map(String::as_str)
        .filter(|s| find(s).is_none())
        .collect()
}
