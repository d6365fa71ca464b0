// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::episode::Episode;

use super::assemble::{HomePage, Row};
use super::slug::episode_href;

const PLAY_ICON: &str = "/play-green.svg";
const PLAY_LABEL: &str = "Tocar episódio";

/// Client-side glue: plays the embedded playlist from the clicked position
const PLAYER_SCRIPT: &str = r#"(function () {
  var playlist = JSON.parse(document.getElementById("playlist").textContent);
  var audio = document.getElementById("player");
  var current = 0;
  function play(index) {
    if (index < 0 || index >= playlist.length) return;
    current = index;
    audio.src = playlist[index].url;
    audio.play();
  }
  audio.addEventListener("ended", function () { play(current + 1); });
  document.querySelectorAll("button[data-playlist-index]").forEach(function (button) {
    button.addEventListener("click", function () {
      play(Number(button.dataset.playlistIndex));
    });
  });
})();"#;

/// Render the home page with the latest episodes and the full table
pub fn render_home(page: &HomePage) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"latestEpisodes\">\n<h2>Últimos lançamentos</h2>\n<ul>\n");
    for row in page.latest_rows() {
        body.push_str(&render_latest_item(row));
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str(
        "<section class=\"allEpisodes\">\n<h2>Todos episódios</h2>\n\
         <table cellspacing=\"0\">\n<thead>\n<tr>\
         <th></th><th>Podcast</th><th>Integrantes</th><th>Data</th><th>Duração</th><th></th>\
         </tr>\n</thead>\n<tbody>\n",
    );
    for row in page.remaining_rows() {
        body.push_str(&render_table_row(row));
    }
    body.push_str("</tbody>\n</table>\n</section>\n");

    body.push_str(&render_player(&page.playlist()));

    render_document("Home | Podcastr", "homepage", &body)
}

/// Render the detail page for a single episode
///
/// The description is catalog-provided HTML and is embedded as is.
pub fn render_episode(episode: &Episode) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<div class=\"thumbnailContainer\">\n\
         <a href=\"/\"><button type=\"button\">Voltar</button></a>\n\
         {}\n{}\n</div>\n",
        render_thumbnail(episode, 700, 160),
        render_play_button(0),
    ));
    body.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<span>{}</span>\n<span>{}</span>\n<span>{}</span>\n</header>\n",
        text(&episode.title),
        text(&episode.members),
        text(&episode.published_at),
        text(&episode.duration_as_string),
    ));
    if let Some(description) = &episode.description {
        body.push_str(&format!(
            "<div class=\"description\">{description}</div>\n"
        ));
    }
    body.push_str(&render_player(std::slice::from_ref(episode)));

    render_document(&format!("{} | Podcastr", episode.title), "episode", &body)
}

fn render_document(title: &str, class: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<div class=\"{}\">\n{}</div>\n</body>\n</html>\n",
        text(title),
        attr(class),
        body
    )
}

fn render_latest_item(row: Row<'_>) -> String {
    let episode = row.episode;
    format!(
        "<li>\n{}\n<div class=\"episodeDetails\">\n<a href=\"{}\">{}</a>\n<p>{}</p>\n\
         <span>{}</span>\n<span>{}</span>\n</div>\n{}\n</li>\n",
        render_thumbnail(episode, 192, 192),
        attr(&episode_href(row.slug)),
        text(&episode.title),
        text(&episode.members),
        text(&episode.published_at),
        text(&episode.duration_as_string),
        render_play_button(row.playlist_index),
    )
}

fn render_table_row(row: Row<'_>) -> String {
    let episode = row.episode;
    format!(
        "<tr>\n<td style=\"width: 72px\">{}</td>\n<td><a href=\"{}\">{}</a></td>\n\
         <td>{}</td>\n<td style=\"width: 100px\">{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>\n",
        render_thumbnail(episode, 120, 120),
        attr(&episode_href(row.slug)),
        text(&episode.title),
        text(&episode.members),
        text(&episode.published_at),
        text(&episode.duration_as_string),
        render_play_button(row.playlist_index),
    )
}

fn render_thumbnail(episode: &Episode, width: u32, height: u32) -> String {
    format!(
        "<img width=\"{width}\" height=\"{height}\" src=\"{}\" alt=\"{}\" style=\"object-fit: cover\">",
        attr(&episode.thumbnail),
        attr(&episode.title),
    )
}

fn render_play_button(playlist_index: usize) -> String {
    format!(
        "<button type=\"button\" data-playlist-index=\"{playlist_index}\">\
         <img src=\"{PLAY_ICON}\" alt=\"{PLAY_LABEL}\"></button>"
    )
}

fn render_player(playlist: &[Episode]) -> String {
    // serde_json output is valid JSON; only "</" could end the script element early
    let json = serde_json::to_string(playlist)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");

    format!(
        "<audio id=\"player\" controls preload=\"none\"></audio>\n\
         <script id=\"playlist\" type=\"application/json\">{json}</script>\n\
         <script>{PLAYER_SCRIPT}</script>\n"
    )
}
