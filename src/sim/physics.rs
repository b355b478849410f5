//! Player movement, gravity and platform landing

use super::state::{Facing, GameEvent, GameState, PlayerAnim};
use super::tick::TickInput;
use crate::consts::*;

/// Walk animation advance per frame while moving
const WALK_ANIM_STEP: f32 = 0.2;
/// Idle bob advance per frame while standing still
const IDLE_ANIM_STEP: f32 = 0.1;

/// Advance the player by one frame
///
/// Order matters: move, integrate, resolve landings against every platform,
/// then allow a jump off whatever was landed on this frame. A discrete press
/// is judged against the ground contact the player had when it arrived.
pub fn update_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    let grounded_at_press = player.on_ground;

    // Horizontal: fixed step, left wins over right
    if input.left {
        player.pos.x -= PLAYER_SPEED;
        player.facing = Facing::Left;
        player.walk_frame += WALK_ANIM_STEP;
        player.anim = PlayerAnim::Walk((player.walk_frame as u32 % 10 + 1) as u8);
    } else if input.right {
        player.pos.x += PLAYER_SPEED;
        player.facing = Facing::Right;
        player.walk_frame += WALK_ANIM_STEP;
        player.anim = PlayerAnim::Walk((player.walk_frame as u32 % 10 + 1) as u8);
    } else if player.on_ground {
        player.walk_frame += IDLE_ANIM_STEP;
        player.anim = PlayerAnim::Walk((player.walk_frame as u32 % 2 + 3) as u8);
    } else {
        player.anim = PlayerAnim::Jump;
    }

    player.vy += GRAVITY;
    player.pos.y += player.vy;
    player.on_ground = false;

    // No early exit: the last matching platform wins
    for platform in &state.platforms {
        let rect = platform.rect.to_camera(state.scroll_x);
        if rect.spans_x_exclusive(player.pos.x)
            && player.bottom() < rect.bottom()
            && player.bottom() + player.vy > rect.top()
        {
            player.set_bottom(rect.top());
            player.vy = 0.0;
            player.on_ground = true;
        }
    }

    let jump = (input.jump && player.on_ground) || (input.jump_pressed && grounded_at_press);
    if jump {
        player.vy = JUMP_STRENGTH;
        player.on_ground = false;
        player.anim = PlayerAnim::Jump;
        state.events.push(GameEvent::Jumped);
    }
}
