use crate::domain::Document;
use crate::templates::{portal_layout, LayoutCtx};
use maud::{html, Markup};

pub fn documents_page(ctx: &LayoutCtx, documents: &[Document]) -> Markup {
    portal_layout(
        "Documents",
        ctx,
        html! {
            section class="card list" {
                div class="list-header" {
                    h2 { "Project Documents" }
                    p class="muted" { "Reference material for the repainting project" }
                }
                table class="table" {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Category" }
                            th { "File" }
                            th { "Uploaded" }
                        }
                    }
                    tbody {
                        @for doc in documents {
                            tr {
                                td {
                                    p class="strong" { (doc.title) }
                                    p class="muted small" { (doc.description) }
                                }
                                td { span class="badge" { (doc.category) } }
                                td class="mono" { (doc.file_name) }
                                td { (doc.upload_date.to_string()) }
                            }
                        }
                    }
                }
            }
        },
    )
}
