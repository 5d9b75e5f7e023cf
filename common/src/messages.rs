//! 利用者向けの文言

pub const MISSING_INPUT: &str = "Please upload a photo or enter a plant description.";
pub const IDENTIFY_FAILED: &str = "An error occurred while identifying the plant. Please try again.";
pub const NOT_IDENTIFIED: &str =
    "Unable to identify the plant. Please try again with a clearer image or more details.";

pub const RESULTS_HEADING: &str = "🌿 Identification Results";
pub const INVALID_TITLE: &str = "✕ Invalid result.";
pub const INVALID_BODY: &str = "Confidence is too low to identify this plant. Try a clearer, closer photo. If different photos always give the same result, the model may need retraining with more and varied images.";
pub const LOW_CONFIDENCE_TITLE: &str = "⚠ Low confidence.";
pub const LOW_CONFIDENCE_BODY: &str = "The model is uncertain. Result may be wrong: try a clearer, closer photo. If different photos always give the same result, the model may need retraining with more images per plant.";
pub const BEST_GUESS: &str = "Best guess (not reliable):";
pub const OTHER_POSSIBILITIES: &str = "Other possibilities:";
pub const NATIVE_TO_PHILIPPINES: &str = "✓ Native to the Philippines";

pub const NO_PLANTS: &str = "No plants available.";
pub const PLANTS_FAILED: &str = "Error loading plants.";
pub const NO_DESCRIPTION: &str = "No description available.";

pub const ASK_LABEL: &str = "Ask";
pub const ANALYZING_LABEL: &str = "Analyzing...";
pub const LOADING_PLANTS: &str = "Loading plants...";
