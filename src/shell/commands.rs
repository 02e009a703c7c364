//
//  onesky-cli
//  shell/commands.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shell command table and handlers.
//!
//! One handler per client endpoint. Handlers only convert positional tokens into
//! typed arguments; every request detail lives in the endpoint methods.

use std::path::Path;

use super::args::Args;
use super::registry::{CommandSpec, HandlerFuture};
use crate::api::endpoints::{
    FileUploadOptions, MultilingualExportOptions, OrderOptions, Pagination, ProjectDetails,
    QuotationOptions,
};
use crate::api::OneSkyClient;

const PAGING: &[&str] = &["page", "per_page"];

pub(super) const COMMANDS: &[CommandSpec] = &[
    // Project groups
    CommandSpec {
        name: "project_group_list",
        required: &[],
        optional: PAGING,
        confirm: false,
        summary: "List project groups",
        handler: project_group_list,
    },
    CommandSpec {
        name: "project_group_show",
        required: &["id"],
        optional: &[],
        confirm: false,
        summary: "Show a project group",
        handler: project_group_show,
    },
    CommandSpec {
        name: "project_group_create",
        required: &["name"],
        optional: &["locale"],
        confirm: false,
        summary: "Create a project group",
        handler: project_group_create,
    },
    CommandSpec {
        name: "project_group_delete",
        required: &["id"],
        optional: &[],
        confirm: true,
        summary: "Delete a project group",
        handler: project_group_delete,
    },
    CommandSpec {
        name: "project_group_languages",
        required: &["id"],
        optional: &[],
        confirm: false,
        summary: "List the languages of a project group",
        handler: project_group_languages,
    },
    // Projects
    CommandSpec {
        name: "project_list",
        required: &["group_id"],
        optional: PAGING,
        confirm: false,
        summary: "List the projects in a group",
        handler: project_list,
    },
    CommandSpec {
        name: "project_show",
        required: &["id"],
        optional: &[],
        confirm: false,
        summary: "Show a project",
        handler: project_show,
    },
    CommandSpec {
        name: "project_create",
        required: &["group_id", "type"],
        optional: &["name", "description"],
        confirm: false,
        summary: "Create a project",
        handler: project_create,
    },
    CommandSpec {
        name: "project_update",
        required: &["id"],
        optional: &["name", "description"],
        confirm: false,
        summary: "Rename or re-describe a project",
        handler: project_update,
    },
    CommandSpec {
        name: "project_delete",
        required: &["id"],
        optional: &[],
        confirm: true,
        summary: "Delete a project",
        handler: project_delete,
    },
    CommandSpec {
        name: "project_languages",
        required: &["id"],
        optional: &[],
        confirm: false,
        summary: "List the languages of a project",
        handler: project_languages,
    },
    CommandSpec {
        name: "project_type_list",
        required: &[],
        optional: &[],
        confirm: false,
        summary: "List project types",
        handler: project_type_list,
    },
    // Files
    CommandSpec {
        name: "file_list",
        required: &["project_id"],
        optional: PAGING,
        confirm: false,
        summary: "List uploaded files",
        handler: file_list,
    },
    CommandSpec {
        name: "file_upload",
        required: &["project_id", "file_name", "file_format"],
        optional: &["locale", "is_keeping_all_strings"],
        confirm: false,
        summary: "Upload a local file",
        handler: file_upload,
    },
    CommandSpec {
        name: "file_delete",
        required: &["project_id", "file_name"],
        optional: &[],
        confirm: true,
        summary: "Delete an uploaded file",
        handler: file_delete,
    },
    // Translations
    CommandSpec {
        name: "translation_export",
        required: &["project_id", "locale", "source_file_name"],
        optional: &["export_file_name"],
        confirm: false,
        summary: "Download the translations of one file",
        handler: translation_export,
    },
    CommandSpec {
        name: "translation_export_multilingual",
        required: &["project_id", "source_file_name"],
        optional: &["export_file_name", "file_format"],
        confirm: false,
        summary: "Download every locale of one file",
        handler: translation_export_multilingual,
    },
    CommandSpec {
        name: "translation_status",
        required: &["project_id", "file_name", "locale"],
        optional: &[],
        confirm: false,
        summary: "Show translation progress",
        handler: translation_status,
    },
    // Import tasks
    CommandSpec {
        name: "import_task_list",
        required: &["project_id"],
        optional: &["page", "per_page", "status"],
        confirm: false,
        summary: "List import tasks",
        handler: import_task_list,
    },
    CommandSpec {
        name: "import_task_show",
        required: &["project_id", "import_id"],
        optional: &[],
        confirm: false,
        summary: "Show an import task",
        handler: import_task_show,
    },
    // Quotations and orders
    CommandSpec {
        name: "quotation_show",
        required: &["project_id", "files", "to_locale"],
        optional: &[
            "is_including_not_translated",
            "is_including_not_approved",
            "is_including_outdated",
            "specialization",
        ],
        confirm: false,
        summary: "Quote a translation order",
        handler: quotation_show,
    },
    CommandSpec {
        name: "order_list",
        required: &["project_id"],
        optional: PAGING,
        confirm: false,
        summary: "List orders",
        handler: order_list,
    },
    CommandSpec {
        name: "order_show",
        required: &["project_id", "order_id"],
        optional: &[],
        confirm: false,
        summary: "Show an order",
        handler: order_show,
    },
    CommandSpec {
        name: "order_create",
        required: &["project_id", "files", "to_locale"],
        optional: &[
            "order_type",
            "is_including_not_translated",
            "is_including_not_approved",
            "is_including_outdated",
            "translator_type",
            "tone",
            "specialization",
            "note",
        ],
        confirm: false,
        summary: "Place a translation order",
        handler: order_create,
    },
    // Locales
    CommandSpec {
        name: "locale_list",
        required: &[],
        optional: &[],
        confirm: false,
        summary: "List supported locales",
        handler: locale_list,
    },
];

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn pagination(args: &Args, first: usize) -> anyhow::Result<Pagination> {
    Ok(Pagination {
        page: args.parse_opt(first, "page")?,
        per_page: args.parse_opt(first + 1, "per_page")?,
    })
}

fn project_group_list(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let page = pagination(&args, 0)?;
        Ok(client.project_group_list(&page).await?)
    })
}

fn project_group_show(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        Ok(client.project_group_show(id).await?)
    })
}

fn project_group_create(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let name = args.text(0, "name")?;
        Ok(client.project_group_create(name, args.opt_text(1)).await?)
    })
}

fn project_group_delete(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        Ok(client.project_group_delete(id).await?)
    })
}

fn project_group_languages(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        Ok(client.project_group_languages(id).await?)
    })
}

fn project_list(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let group_id = args.parse(0, "group_id")?;
        let page = pagination(&args, 1)?;
        Ok(client.project_list(group_id, &page).await?)
    })
}

fn project_show(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        Ok(client.project_show(id).await?)
    })
}

fn project_create(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let group_id = args.parse(0, "group_id")?;
        let project_type = args.text(1, "type")?;
        let details = ProjectDetails {
            name: owned(args.opt_text(2)),
            description: owned(args.opt_text(3)),
        };
        Ok(client
            .project_create(group_id, project_type, &details)
            .await?)
    })
}

fn project_update(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        let details = ProjectDetails {
            name: owned(args.opt_text(1)),
            description: owned(args.opt_text(2)),
        };
        Ok(client.project_update(id, &details).await?)
    })
}

fn project_delete(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        Ok(client.project_delete(id).await?)
    })
}

fn project_languages(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let id = args.parse(0, "id")?;
        Ok(client.project_languages(id).await?)
    })
}

fn project_type_list(client: &OneSkyClient, _args: Args) -> HandlerFuture<'_> {
    Box::pin(async move { Ok(client.project_type_list().await?) })
}

fn file_list(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let page = pagination(&args, 1)?;
        Ok(client.file_list(project_id, &page).await?)
    })
}

fn file_upload(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let path = Path::new(args.text(1, "file_name")?);
        let file_format = args.text(2, "file_format")?;
        let options = FileUploadOptions {
            locale: owned(args.opt_text(3)),
            is_keeping_all_strings: args.flag_opt(4, "is_keeping_all_strings")?,
        };
        Ok(client
            .file_upload(project_id, path, file_format, &options)
            .await?)
    })
}

fn file_delete(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let file_name = args.text(1, "file_name")?;
        Ok(client.file_delete(project_id, file_name).await?)
    })
}

fn translation_export(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let locale = args.text(1, "locale")?;
        let source_file_name = args.text(2, "source_file_name")?;
        Ok(client
            .translation_export(project_id, locale, source_file_name, args.opt_text(3))
            .await?)
    })
}

fn translation_export_multilingual(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let source_file_name = args.text(1, "source_file_name")?;
        let options = MultilingualExportOptions {
            export_file_name: owned(args.opt_text(2)),
            file_format: owned(args.opt_text(3)),
        };
        Ok(client
            .translation_export_multilingual(project_id, source_file_name, &options)
            .await?)
    })
}

fn translation_status(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let file_name = args.text(1, "file_name")?;
        let locale = args.text(2, "locale")?;
        Ok(client
            .translation_status(project_id, file_name, locale)
            .await?)
    })
}

fn import_task_list(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let page = pagination(&args, 1)?;
        Ok(client
            .import_task_list(project_id, &page, args.opt_text(3))
            .await?)
    })
}

fn import_task_show(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let import_id = args.parse(1, "import_id")?;
        Ok(client.import_task_show(project_id, import_id).await?)
    })
}

fn quotation_show(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let files = args.list(1, "files")?;
        let to_locale = args.text(2, "to_locale")?;
        let options = QuotationOptions {
            is_including_not_translated: args.flag_opt(3, "is_including_not_translated")?,
            is_including_not_approved: args.flag_opt(4, "is_including_not_approved")?,
            is_including_outdated: args.flag_opt(5, "is_including_outdated")?,
            specialization: owned(args.opt_text(6)),
        };
        Ok(client
            .quotation_show(project_id, &files, to_locale, &options)
            .await?)
    })
}

fn order_list(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let page = pagination(&args, 1)?;
        Ok(client.order_list(project_id, &page).await?)
    })
}

fn order_show(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let order_id = args.parse(1, "order_id")?;
        Ok(client.order_show(project_id, order_id).await?)
    })
}

fn order_create(client: &OneSkyClient, args: Args) -> HandlerFuture<'_> {
    Box::pin(async move {
        let project_id = args.parse(0, "project_id")?;
        let files = args.list(1, "files")?;
        let to_locale = args.text(2, "to_locale")?;
        let options = OrderOptions {
            order_type: owned(args.opt_text(3)),
            is_including_not_translated: args.flag_opt(4, "is_including_not_translated")?,
            is_including_not_approved: args.flag_opt(5, "is_including_not_approved")?,
            is_including_outdated: args.flag_opt(6, "is_including_outdated")?,
            translator_type: owned(args.opt_text(7)),
            tone: owned(args.opt_text(8)),
            specialization: owned(args.opt_text(9)),
            note: owned(args.opt_text(10)),
        };
        Ok(client
            .order_create(project_id, &files, to_locale, &options)
            .await?)
    })
}

fn locale_list(client: &OneSkyClient, _args: Args) -> HandlerFuture<'_> {
    Box::pin(async move { Ok(client.locale_list().await?) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Method;
    use crate::api::endpoints::test_support::Harness;

    fn args(tokens: &[&str]) -> Args {
        Args::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn test_order_create_maps_positions_to_options() {
        let mut h = Harness::new().await;
        let mock = h.expect("POST", "/projects/7/orders").await;

        order_create(
            &h.client,
            args(&["7", "a.po,b.po", "ja", "translate-only", "yes", "", "no"]),
        )
        .await
        .unwrap_err();
        // An empty flag is rejected before anything is sent.
        assert!(h.sent.lock().unwrap().is_empty());

        order_create(
            &h.client,
            args(&["7", "a.po,b.po", "ja", "translate-only", "yes", "1", "no"]),
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(h.last().method, Method::Post);
        h.assert_last_params(&[
            ("files", "a.po,b.po"),
            ("to_locale", "ja"),
            ("order_type", "translate-only"),
            ("is_including_not_translated", "true"),
            ("is_including_not_approved", "true"),
            ("is_including_outdated", "false"),
        ]);
    }

    #[tokio::test]
    async fn test_project_list_with_paging() {
        let mut h = Harness::new().await;
        let mock = h.expect("GET", "/project-groups/3/projects").await;

        project_list(&h.client, args(&["3", "2", "10"])).await.unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[("page", "2"), ("per_page", "10")]);
    }

    #[tokio::test]
    async fn test_bad_id_makes_no_request() {
        let h = Harness::new().await;
        let err = project_show(&h.client, args(&["abc"])).await.unwrap_err();
        assert!(err.to_string().contains("Invalid value for id"));
        assert!(h.sent.lock().unwrap().is_empty());
    }
}
