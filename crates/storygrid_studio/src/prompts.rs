//! Prompt templates sent to the generation service.

use storygrid_core::{SceneId, SceneRegistry};

/// Prompt asking for a six-frame commercial script.
///
/// The product description is included as selling points only when it is
/// not blank.
pub fn script_prompt(keyword: &str, description: &str) -> String {
    let context = if description.trim().is_empty() {
        String::new()
    } else {
        format!("Product Description & Selling Points: {}", description)
    };

    format!(
        r#"Act as a professional advertising creative director. Generate a high-impact 15-second commercial video script for the product: "{keyword}".
{context}

The output must consist of exactly 6 consecutive frames labeled C01 to C06.
For each frame, provide a detailed visual action description suitable for a cinematic storyboard and any dialogue or voiceover.

FORMAT REQUIREMENTS:
C01: [Action description], [Dialogue/VO]
C02: [Action description], [Dialogue/VO]
...
C06: [Final branding shot and slogan]

STRICT RULES:
- Only output the script content.
- No introductory text or concluding remarks.
- Use professional cinematic language (e.g., Close-up, Wide shot, Tilt, Pan).
- Ensure the story flows continuously through the 15 seconds."#
    )
}

/// Prompt asking for a Chinese/English translation that keeps the labels.
pub fn translation_prompt(script: &str) -> String {
    format!(
        r#"Translate the following storyboard script. If the content is in Chinese, translate it to English. If it is in English, translate it to Chinese.
Maintain the exact structure (C01:, C02:, etc.) and labeling.
Only return the translated text without any preamble.

SCRIPT:
{script}"#
    )
}

/// Prompt asking for a rewrite of one frame.
pub fn refinement_prompt(id: SceneId, keyword: &str, description: &str, current: &str) -> String {
    let context = if description.trim().is_empty() {
        String::new()
    } else {
        format!("Product Context: {}", description)
    };

    format!(
        r#"Refine and regenerate the ad script description for frame {id} of a 15-second commercial for "{keyword}".
{context}
Current description: "{current}"

Requirements:
- Provide a cinematic visual action description.
- Include dialogue or voiceover if applicable.
- Style: High-impact, cinematic, black and white line art friendly.
- Output ONLY the refined text for this single frame. No labels, no preamble."#
    )
}

/// One `Frame C0n: ...` line per slot, `Empty scene` for blank slots.
pub fn scene_lines(scenes: &SceneRegistry) -> String {
    scenes
        .iter()
        .map(|scene| {
            let description = if scene.description().is_empty() {
                "Empty scene"
            } else {
                scene.description().as_str()
            };
            format!("Frame {}: {}", scene.id(), description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking for the 3x2 line-art storyboard grid.
pub fn composite_prompt(scenes: &SceneRegistry) -> String {
    let scene_lines = scene_lines(scenes);

    format!(
        r#"Create a professional cinematic 3x2 grid storyboard layout on a single 16:9 canvas.
There must be exactly 6 equal-sized frames arranged in 3 columns and 2 rows.

Style: Clean, sharp black and white line art (sketch style).
Characters: Outline silhouettes only, no facial details.

LAYOUT INSTRUCTIONS:
- Arrange the following 6 scenes in a strict 3x2 grid.
- Each frame must have its ID (C01, C02, etc.) clearly labeled in the top-left corner in English.

SCENE DESCRIPTIONS:
{scene_lines}

STRICT RULES:
- BLACK AND WHITE LINE ART ONLY.
- NO COLORS.
- ALL TEXT IN ENGLISH.
- CINEMATIC COMPOSITION FOR EACH FRAME."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_prompt_includes_context_only_when_given() {
        let bare = script_prompt("Smart Watch", "  ");
        assert!(bare.contains(r#"the product: "Smart Watch"."#));
        assert!(!bare.contains("Selling Points"));

        let rich = script_prompt("Smart Watch", "Waterproof, 7-day battery");
        assert!(rich.contains("Product Description & Selling Points: Waterproof, 7-day battery"));
        assert!(rich.contains("exactly 6 consecutive frames labeled C01 to C06"));
    }

    #[test]
    fn translation_prompt_embeds_script_last() {
        let prompt = translation_prompt("C01: 特写手表");
        assert!(prompt.ends_with("SCRIPT:\nC01: 特写手表"));
    }

    #[test]
    fn refinement_prompt_names_frame_and_current_text() {
        let prompt = refinement_prompt(SceneId::C04, "Mug", "", "Steam rises");
        assert!(prompt.contains("for frame C04 of a 15-second commercial for \"Mug\""));
        assert!(prompt.contains("Current description: \"Steam rises\""));
        assert!(!prompt.contains("Product Context"));
    }

    #[test]
    fn composite_prompt_lists_all_six_frames() {
        let mut scenes = SceneRegistry::new();
        scenes.edit_description(SceneId::C01, "Close-up of the mug");
        scenes.edit_description(SceneId::C06, "Logo");

        let prompt = composite_prompt(&scenes);
        assert!(prompt.contains(
            "Frame C01: Close-up of the mug\nFrame C02: Empty scene\nFrame C03: Empty scene\n\
             Frame C04: Empty scene\nFrame C05: Empty scene\nFrame C06: Logo"
        ));
        assert!(prompt.contains("3x2 grid"));
        assert!(prompt.contains("16:9"));
    }
}
