// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names and the default stylesheet.

/// Class of every controller's container element.
pub const CONTROLLER_CLASS: &str = "c";

/// Class of the numeric text readout.
pub const READOUT_CLASS: &str = "number-readout";

/// Class of a slider's background track.
pub const TRACK_CLASS: &str = "slider";

/// Class of a slider's foreground fill.
pub const FILL_CLASS: &str = "slider-fg";

/// Default look for slider tracks and fills, including the round knob drawn
/// at the end of the fill.
pub const DEFAULT_STYLESHEET: &str = "\
.slider {
  box-shadow: inset 0 2px 4px rgba(0,0,0,0.15);
  height: 1em;
  border-radius: 1em;
  background-color: #eee;
  padding: 0 0.5em;
  overflow: hidden;
}

.slider-fg {
  padding: 1px 0 2px 0;
  background-color: #aaa;
  height: 1em;
  margin-left: -0.5em;
  padding-right: 0.5em;
  border-radius: 1em 0 0 1em;
}

.slider-fg:after {
  display: inline-block;
  border-radius: 1em;
  background-color: #fff;
  border: 1px solid #aaa;
  content: '';
  float: right;
  margin-right: -1em;
  margin-top: -1px;
  height: 0.9em;
  width: 0.9em;
}
";
