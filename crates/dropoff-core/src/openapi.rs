//! Merging of per-crate OpenAPI documents into one served document

use utoipa::openapi::OpenApi;

/// Merges `schemas` into `base`, combining paths, components and tags.
pub fn merge_openapi_schemas(mut base: OpenApi, schemas: Vec<OpenApi>) -> OpenApi {
    for schema in schemas {
        base.paths.paths.extend(schema.paths.paths);

        if let Some(components) = schema.components {
            let base_components = base.components.get_or_insert_with(Default::default);
            base_components.schemas.extend(components.schemas);
            base_components.responses.extend(components.responses);
        }

        if let Some(tags) = schema.tags {
            base.tags.get_or_insert_with(Vec::new).extend(tags);
        }
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::path::{HttpMethod, OperationBuilder, PathItem, PathsBuilder};
    use utoipa::openapi::tag::TagBuilder;
    use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

    fn doc_with_path(path: &str, tag: &str) -> OpenApi {
        OpenApiBuilder::new()
            .info(InfoBuilder::new().title(tag).version("1").build())
            .paths(PathsBuilder::new().path(
                path,
                PathItem::new(HttpMethod::Post, OperationBuilder::new().build()),
            ))
            .tags(Some(vec![TagBuilder::new().name(tag).build()]))
            .build()
    }

    #[test]
    fn test_merge_combines_paths_and_tags() {
        let base = OpenApiBuilder::new()
            .info(InfoBuilder::new().title("base").version("1").build())
            .build();

        let merged = merge_openapi_schemas(
            base,
            vec![
                doc_with_path("/analysis/dropoff", "Analysis"),
                doc_with_path("/report/send", "Report"),
            ],
        );

        assert_eq!(merged.paths.paths.len(), 2);
        assert!(merged.paths.paths.contains_key("/analysis/dropoff"));
        assert_eq!(merged.tags.unwrap().len(), 2);
        assert_eq!(merged.info.title, "base");
    }
}
