//! The dashboard's feature table. Group and feature order is display order.

use crate::{Feature, FeatureGroup};
use featdeck_domain::FeatureDescriptor as D;
use featdeck_domain::Status::{Development, Planned, Production, Testing};

const fn live(name: &'static str, api: &'static str) -> Feature {
    Feature::new(name, D::live(Production, api))
}

pub(crate) static GROUPS: &[FeatureGroup] = &[
    FeatureGroup {
        name: "auth",
        features: &[
            live("emailLogin", "/auth/login"),
            live("emailRegister", "/auth/register"),
            live("googleOAuth", "/auth/oauth/google"),
            live("githubOAuth", "/auth/oauth/github"),
            live("jwtTokens", "/auth/refresh"),
            live("userProfile", "/auth/me"),
        ],
    },
    FeatureGroup {
        name: "templates",
        features: &[
            live("createTemplate", "/templates"),
            live("listTemplates", "/templates"),
            live("updateTemplate", "/templates/{id}"),
            live("deleteTemplate", "/templates/{id}"),
            live("validateTemplate", "/templates/{id}/validate"),
            live("previewTemplate", "/templates/{id}/preview"),
            live("publicTemplates", "/templates/public"),
            live("importExport", "/templates/import"),
        ],
    },
    FeatureGroup {
        name: "generation",
        features: &[
            live("startGeneration", "/generate/start"),
            live("checkStatus", "/generate/{id}/status"),
            live("getResult", "/generate/{id}/result"),
            live("cancelGeneration", "/generate/{id}/cancel"),
            live("generationHistory", "/generate/history"),
            Feature::new("batchGeneration", D::live(Testing, "/generate/batch")),
            live("progressTracking", "included in status"),
            live("costCalculation", "included in result"),
        ],
    },
    FeatureGroup {
        name: "export",
        features: &[
            live("exportJSON", "/generate/{id}/export?format=json"),
            live("exportCSV", "/generate/{id}/export?format=csv"),
            live("exportPDF", "/generate/{id}/export?format=pdf"),
            live("exportExcel", "/generate/{id}/export?format=xlsx"),
            live("exportMarkdown", "/generate/{id}/export?format=md"),
            live("exportHTML", "/generate/{id}/export?format=html"),
            live("exportXML", "/generate/{id}/export?format=xml"),
            live("exportTXT", "/generate/{id}/export?format=txt"),
        ],
    },
    FeatureGroup {
        name: "providers",
        features: &[
            live("listProviders", "/providers"),
            live("listModels", "/providers/models"),
            live("modelFiltering", "/providers/models?free=true"),
            live("providerHealth", "/providers/{provider}/health"),
            live("openRouter", "OpenRouter integration"),
            live("ollama", "Ollama integration"),
            live("pricingInfo", "included in model list"),
        ],
    },
    FeatureGroup {
        name: "planned",
        features: &[
            Feature::new("visualBuilder", D::upcoming(Planned, "Visual template builder UI")),
            Feature::new("realtimeUpdates", D::upcoming(Development, "WebSocket support")),
            Feature::new("resultCaching", D::upcoming(Planned, "Generation result caching")),
            Feature::new("fullCelery", D::upcoming(Development, "Full Celery/Redis integration")),
            Feature::new("fileUploads", D::upcoming(Planned, "File upload for variables")),
            Feature::new(
                "templateVersioning",
                D::upcoming(Planned, "Version control for templates"),
            ),
            Feature::new("advancedSearch", D::upcoming(Planned, "Advanced template search")),
            Feature::new("rateLimiting", D::upcoming(Planned, "API rate limiting")),
        ],
    },
];
