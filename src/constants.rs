//! Global constants for the dropscope front end

/// Element id of the drag-and-drop target
pub const DROP_AREA_ID: &str = "dropArea";

/// Element id of the hidden `<input type="file">`
pub const FILE_INPUT_ID: &str = "fileElem";

/// Element id of the button that opens the file picker
pub const FILE_SELECT_ID: &str = "fileSelect";

/// Element id of the append-only gallery container
pub const GALLERY_ID: &str = "gallery";

/// Element id of the class-name legend list
pub const LEGEND_LIST_ID: &str = "legendList";

/// Element id of the optional JSON configuration block
pub const CONFIG_SCRIPT_ID: &str = "dropscope-config";

/// Class added to the drop target while a drag hovers over it
pub const HIGHLIGHT_CLASS: &str = "bg-gray-200";

/// Classes of the wrapper around an image and its label
pub const IMAGE_CONTAINER_CLASS: &str = "image-container";

/// Classes of the `<img>` element itself
pub const IMAGE_CLASS: &str = "max-w-full h-auto rounded shadow-md";

/// Classes of the caption under an image
pub const IMAGE_LABEL_CLASS: &str = "image-label mt-2 text-sm font-semibold";

/// Classes of the per-file error block
pub const ERROR_CLASS: &str = "image-container p-4 bg-red-100 text-red-700 rounded";

/// Caption of the uploaded image
pub const ORIGINAL_LABEL: &str = "Original";

/// Caption of the image returned by the backend
pub const PROCESSED_LABEL: &str = "Processed";

/// MIME type the backend encodes processed images with
pub const PROCESSED_MIME: &str = "image/png";

/// Global object the backend functions are exposed on
pub const BRIDGE_NAMESPACE: &str = "eel";

/// Backend function that processes one base64 image
pub const PROCESS_IMAGE_FN: &str = "process_image";

/// Backend function that returns the class-name list
pub const CLASS_NAMES_FN: &str = "get_class_names";

/// MIME type assumed for in-memory files without one
pub const DEFAULT_FILE_MIME: &str = "application/octet-stream";
