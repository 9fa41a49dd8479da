//! 이메일 템플릿 렌더러
//!
//! 프로세스 시작 시 템플릿 디렉토리의 `*.hbs` 파일을 모두 읽어
//! 불변 맵으로 보관하고, 이름과 변수 맵을 받아 마크업 문자열을 렌더링합니다.
//! 제어 흐름 없는 단순 `{{key}}` 치환만 지원합니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;

use crate::errors::AppError;

/// 템플릿 파일 확장자
const TEMPLATE_EXTENSION: &str = "hbs";

/// 이메일 템플릿 렌더러
///
/// 템플릿 집합은 생성 시점에 로드된 후 변경되지 않습니다.
pub struct TemplateRenderer {
    /// 템플릿 이름(확장자 제외) → 템플릿 소스
    templates: HashMap<String, String>,
}

impl TemplateRenderer {
    /// 디렉토리에서 템플릿을 로드하여 렌더러를 생성합니다.
    ///
    /// `*.hbs` 파일만 읽으며, 파일명에서 확장자를 제거한 것이 템플릿
    /// 이름이 됩니다 (예: `email-verification.hbs` → `email-verification`).
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 디렉토리 또는 파일 읽기 실패
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| {
            AppError::InternalError(format!("템플릿 디렉토리 읽기 실패 ({}): {}", dir.display(), e))
        })?;

        let mut templates = HashMap::new();

        for entry in entries {
            let entry = entry
                .map_err(|e| AppError::InternalError(format!("템플릿 디렉토리 읽기 실패: {}", e)))?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let source = fs::read_to_string(&path).map_err(|e| {
                AppError::InternalError(format!("템플릿 읽기 실패 ({}): {}", path.display(), e))
            })?;

            templates.insert(name.to_string(), source);
        }

        info!("📄 템플릿 {}개 로드됨: {}", templates.len(), dir.display());

        Ok(Self { templates })
    }

    /// 미리 준비된 템플릿 맵으로 렌더러를 생성합니다.
    ///
    /// 단위 테스트나 임베디드 템플릿 용도입니다.
    pub fn from_templates(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    /// 이름으로 템플릿을 찾아 변수를 치환한 마크업을 반환합니다.
    ///
    /// 템플릿 내 `{{key}}` 및 `{{ key }}` 자리에 변수 값이 들어갑니다.
    /// 변수 맵에 없는 자리는 그대로 남습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 알 수 없는 템플릿 이름
    pub fn render(
        &self,
        name: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, AppError> {
        let source = self
            .templates
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("템플릿을 찾을 수 없습니다: {}", name)))?;

        let mut output = source.clone();
        for (key, value) in variables {
            output = output
                .replace(&format!("{{{{{}}}}}", key), value)
                .replace(&format!("{{{{ {} }}}}", key), value);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TemplateRenderer {
        let mut templates = HashMap::new();
        templates.insert(
            "email-verification".to_string(),
            "<a href=\"{{link}}\">Verify</a>".to_string(),
        );
        TemplateRenderer::from_templates(templates)
    }

    #[test]
    fn test_render_substitutes_variables() {
        let mut variables = HashMap::new();
        variables.insert("link".to_string(), "http://x/verify?token=t".to_string());

        let html = renderer().render("email-verification", &variables).unwrap();

        assert_eq!(html, "<a href=\"http://x/verify?token=t\">Verify</a>");
    }

    #[test]
    fn test_render_supports_spaced_placeholders() {
        let mut templates = HashMap::new();
        templates.insert("greeting".to_string(), "Hello {{ name }}!".to_string());
        let renderer = TemplateRenderer::from_templates(templates);

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), "A".to_string());

        assert_eq!(renderer.render("greeting", &variables).unwrap(), "Hello A!");
    }

    #[test]
    fn test_unknown_template_fails_not_found() {
        let result = renderer().render("does-not-exist", &HashMap::new());

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
