use crate::toc::TocView;
use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/static/style.css" />
  </head>
  <body>
    <main>
      <h1>{{ title }}</h1>
      {% if !errors.is_empty() %}
      <ul class="errors">
        {% for error in errors %}
        <li>{{ error }}</li>
        {% endfor %}
      </ul>
      {% endif %}
      <form method="post" action="{{ post_url }}">
        <label for="target_wiki_page">Wikipedia page</label>
        <input type="text" id="target_wiki_page" name="target_wiki_page" placeholder="https://en.wikipedia.org/wiki/Satchel" />
        <button type="submit">Show contents</button>
      </form>
    </main>
  </body>
</html>"#,
    ext = "html"
)]
pub struct ChooseWikiPage {
    pub title: String,
    pub post_url: String,
    pub errors: Vec<String>,
}

html_responder!(ChooseWikiPage);

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/static/style.css" />
  </head>
  <body>
    <main>
      <h1>{{ title }}</h1>
      {% if !errors.is_empty() %}
      <ul class="errors">
        {% for error in errors %}
        <li>{{ error }}</li>
        {% endfor %}
      </ul>
      {% endif %}
      {% match toc %}
      {% when Some with (toc) %}
      <section class="toc">{{ toc|safe }}</section>
      {% when None %}
      {% endmatch %}
      <p><a href="{{ choose_url }}">Choose another page</a></p>
    </main>
  </body>
</html>"#,
    ext = "html"
)]
pub struct ViewWikiToc {
    pub title: String,
    pub toc: Option<String>,
    pub errors: Vec<String>,
    pub choose_url: String,
}

html_responder!(ViewWikiToc);

impl ViewWikiToc {
    pub fn new(view: TocView, choose_url: String) -> Self {
        Self {
            title: view.title,
            toc: view.toc,
            errors: view.errors,
            choose_url,
        }
    }
}
