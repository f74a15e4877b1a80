/// Plugin id used for the settings section and fields
pub const PLUGIN_ID: &str = "connections_split_categories";

/// Option name under which the settings are persisted (`{plugin_id}_{section}`)
pub const SETTINGS_OPTION_NAME: &str = "connections_split_categories_general";

/// Settings page the section and fields are registered on
pub const SETTINGS_PAGE_HOOK: &str = "connections_page_connections_settings";

/// Settings key holding the selected category ids
pub const CATEGORIES_KEY: &str = "categories";

/// Settings key holding the generic panel display flag
pub const DISPLAY_CATEGORY_METABOX_KEY: &str = "display_category_metabox";

/// Field type of the repeatable category select settings field
pub const SPLIT_CATEGORY_FIELD_TYPE: &str = "split-category-repeatable";

/// Panel and field type of the restricted category checklist
pub const CATEGORY_CHECKLIST_FIELD_TYPE: &str = "category_checklist";

/// Id of the host's generic category panel
pub const GENERIC_CATEGORY_PANEL_ID: &str = "categorydiv";

/// Prefix for dedicated panel ids and content block keys
pub const CATEGORY_ID_PREFIX: &str = "category-id-";

/// Suffix for the image grid content block variant
pub const IMAGE_GRID_SUFFIX: &str = "-as-image-grid";

/// Page hooks the generic panel is shown on in the admin
pub const DEFAULT_ADMIN_PAGE_HOOKS: [&str; 2] = [
    "connections_page_connections_add",
    "connections_page_connections_manage",
];

/// Page id used for the generic panel on public requests
pub const PUBLIC_PAGE: &str = "public";

/// CSV export field type for categories
pub const CSV_EXPORT_CATEGORY_TYPE: u8 = 6;

/// Host table the category export columns read from
pub const TERMS_TABLE: &str = "connections_terms";

/// Default number of checked items after which a checklist disables the rest
pub const DEFAULT_SELECTION_LIMIT: usize = 7;

/// Notice shown when the host directory is not active
pub const HOST_MISSING_NOTICE: &str =
    "Connections must be installed and active in order use Connections Split Categories.";
