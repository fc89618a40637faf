pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ToolsApi {
    Outline,
    SlideContent,
    Writing,
}

impl ToolsApi {
    pub fn path(&self) -> ApiPath {
        match self {
            ToolsApi::Outline => ApiPath::Static("/tools/aippt_outline"),
            ToolsApi::SlideContent => ApiPath::Static("/tools/aippt"),
            ToolsApi::Writing => ApiPath::Static("/tools/ai_writing"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolsApi::Outline => "aippt_outline",
            ToolsApi::SlideContent => "aippt",
            ToolsApi::Writing => "ai_writing",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FilesApi {
    Get,
}

impl FilesApi {
    pub fn path(&self, filename: Option<&str>) -> ApiPath {
        let filename = filename.unwrap_or("{filename}");
        match self {
            FilesApi::Get => ApiPath::Dynamic(format!("/files/{}", filename)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ServiceApi {
    Index,
    Health,
}

impl ServiceApi {
    pub fn path(&self) -> ApiPath {
        match self {
            ServiceApi::Index => ApiPath::Static("/"),
            ServiceApi::Health => ApiPath::Static("/health"),
        }
    }
}

/// Operation name / endpoint pairs, used both for the startup banner and
/// the capability listing served at `/`.
pub fn all_api_paths() -> Vec<(&'static str, String)> {
    let mut paths = Vec::new();
    for tool in [ToolsApi::Outline, ToolsApi::SlideContent, ToolsApi::Writing] {
        paths.push((tool.name(), tool.path().as_str().to_string()));
    }
    paths.push(("files", FilesApi::Get.path(None).as_str().to_string()));
    paths.push(("health", ServiceApi::Health.path().as_str().to_string()));
    paths
}

pub fn print_all_api_paths() {
    for (name, path) in all_api_paths() {
        println!("{name}: {path}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_paths() {
        assert_eq!(ToolsApi::Outline.path().as_str(), "/tools/aippt_outline");
        assert_eq!(ToolsApi::SlideContent.path().as_str(), "/tools/aippt");
        assert_eq!(ToolsApi::Writing.path().as_str(), "/tools/ai_writing");
    }

    #[test]
    fn test_file_path_with_and_without_filename() {
        assert_eq!(
            FilesApi::Get.path(Some("ppt_abc.json")).as_str(),
            "/files/ppt_abc.json"
        );
        assert_eq!(FilesApi::Get.path(None).as_str(), "/files/{filename}");
    }

    #[test]
    fn test_all_api_paths_covers_every_operation() {
        let paths = all_api_paths();
        let names: Vec<&str> = paths.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["aippt_outline", "aippt", "ai_writing", "files", "health"]
        );
    }
}
