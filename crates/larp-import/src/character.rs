//! Character rows: `run, player, character, group, race, rank`.

use larp_core::{
  event::{Character, NewAssignment, NewCharacter, NewGroup},
  player::PlayerName,
  store::LarpStore,
  text::{is_blank, parse_run},
};

use crate::{resolve::Resolver, row::CharacterRow};

/// Import one character row and describe the outcome.
///
/// A blank player name yields no player. A row whose character, group and
/// race columns are all blank yields no character; otherwise the event,
/// group and race are resolved (blank names included) before the character.
/// Only when both exist is an assignment attempted.
pub async fn import_character_row<S: LarpStore>(
  store: &S,
  event_name: &str,
  row: &CharacterRow,
) -> Result<String, S::Error> {
  let run = match parse_run(&row.run) {
    Ok(run) => run,
    Err(_) => return Ok(format!("Run {} invalid", row.run)),
  };

  let resolver = Resolver::new(store);

  let player = match PlayerName::derive(&row.player) {
    Some(name) => Some(resolver.player(name).await?.record),
    None => None,
  };
  let character = resolve_character(&resolver, event_name, row).await?;

  Ok(match (player, character) {
    (Some(player), Some(character)) => {
      let assignment = resolver
        .assignment(NewAssignment {
          run,
          character_id: character.character_id,
          player_id: player.player_id,
          gender: None,
          discord_email: None,
        })
        .await?;
      if assignment.created {
        format!("Character {} assigned to {}", character.name, player.full_name())
      } else {
        "Not assigned.".to_owned()
      }
    }
    (player, character) => {
      let mut status = match player {
        Some(player) => format!("Created user {}", player.full_name()),
        None => "User invalid".to_owned(),
      };
      if character.is_none() {
        status.push_str(". Character invalid");
      }
      status
    }
  })
}

async fn resolve_character<S: LarpStore>(
  resolver: &Resolver<'_, S>,
  event_name: &str,
  row: &CharacterRow,
) -> Result<Option<Character>, S::Error> {
  if is_blank(&row.character) && is_blank(&row.group) && is_blank(&row.race) {
    return Ok(None);
  }

  let event = resolver.event(event_name).await?.record;
  let group = resolver
    .group(NewGroup {
      event_id: event.event_id,
      name:     row.group.clone(),
      weapon:   String::new(),
    })
    .await?
    .record;
  let race = resolver.race(&row.race).await?.record;

  let character = resolver
    .character(NewCharacter {
      name: row.character.clone(),
      group_id: Some(group.group_id),
      race_id: Some(race.race_id),
      rank: row.rank.clone(),
      ..Default::default()
    })
    .await?
    .record;
  Ok(Some(character))
}

