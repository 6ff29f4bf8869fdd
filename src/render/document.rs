/// Wraps the rendered table in the static providers landing page: front
/// matter, contribution callout, the table itself, and the all-providers
/// link.
pub fn render_document(table: &str) -> String {
    format!(
        "---
title: Integration packages
---

<Info>

If you'd like to contribute an integration, see [Contributing integrations](/oss/integrations/contributing).

</Info>

## Integration packages

These providers have standalone `langchain-{{provider}}` packages for improved versioning, dependency management and testing.

{table}

## All providers

Click [here](/oss/integrations/providers/all_providers) to see all providers or search
for a provider using the search field.

"
    )
}
