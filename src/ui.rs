pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #0b1120;
      --bg-2: #111c33;
      --ink: #e5e7eb;
      --muted: #94a3b8;
      --accent: #3b82f6;
      --accent-soft: rgba(59, 130, 246, 0.22);
      --danger: #ef4444;
      --card: #141f38;
      --line: rgba(148, 163, 184, 0.18);
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 65%),
        linear-gradient(160deg, var(--bg-1), #0f172a 70%, #0b1120 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 56px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 26px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      color: var(--accent);
    }

    .today {
      color: var(--muted);
      font-size: 0.95rem;
    }

    form.add {
      display: flex;
      gap: 10px;
    }

    input[type="text"],
    input[type="number"] {
      background: #0f172a;
      border: 1px solid var(--line);
      border-radius: 10px;
      color: var(--ink);
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
    }

    input[type="text"] {
      flex: 1;
    }

    input[type="number"] {
      width: 90px;
      padding: 8px 10px;
      font-size: 0.9rem;
    }

    input:focus {
      outline: 2px solid var(--accent-soft);
      border-color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 120ms ease, opacity 120ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button:disabled {
      opacity: 0.55;
      cursor: default;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
      font-weight: 600;
    }

    ul.habits {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 12px;
    }

    li.habit {
      background: #0f172a;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 16px;
      display: grid;
      gap: 12px;
    }

    .habit-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .habit-main {
      display: flex;
      align-items: center;
      gap: 12px;
      min-width: 0;
    }

    button.check {
      width: 40px;
      height: 40px;
      padding: 0;
      flex-shrink: 0;
      border-radius: 10px;
      background: transparent;
      border: 2px solid var(--accent);
      color: white;
      font-size: 1.1rem;
    }

    button.check.done {
      background: var(--accent);
    }

    .habit-name {
      font-size: 1.05rem;
      font-weight: 500;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .streak {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .streak b {
      color: var(--accent);
    }

    button.delete {
      background: transparent;
      color: var(--muted);
      font-size: 1.3rem;
      padding: 4px 10px;
    }

    button.delete:hover {
      color: var(--danger);
    }

    .time-row {
      display: flex;
      align-items: center;
      gap: 10px;
      border-top: 1px solid var(--line);
      padding-top: 12px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .time-row button {
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .time-row .logged {
      margin-left: auto;
      color: var(--accent);
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 12px;
    }

    select {
      background: #0f172a;
      border: 1px solid var(--line);
      border-radius: 10px;
      color: var(--ink);
      padding: 10px 12px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    .chart-card {
      background: #0f172a;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 14px;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-fill {
      fill: var(--accent-soft);
      stroke: none;
    }

    .chart-point {
      fill: #0f172a;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(148, 163, 184, 0.15);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
      margin-top: 12px;
    }

    .metric {
      background: #0f172a;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .metric .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .metric .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent);
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #34d399;
    }

    .empty {
      color: var(--muted);
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <span class="today">Today: {{DATE}}</span>
    </header>

    <form class="add" id="add-form">
      <input type="text" id="habit-name" placeholder="e.g., Drink Water" autocomplete="off" />
      <button type="submit">Add Habit</button>
    </form>

    <section>
      <h2>Your Habits</h2>
      <ul class="habits" id="habit-list"></ul>
      <p class="empty" id="empty-hint" hidden>No habits yet. Add one above!</p>
    </section>

    <section>
      <div class="chart-header">
        <h2>Habit Progress</h2>
        <select id="habit-select"></select>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Time logged chart" role="img"></svg>
      </div>
      <div class="metrics">
        <div class="metric">
          <span class="label">Today</span>
          <span class="value" id="metric-today">0</span>
        </div>
        <div class="metric">
          <span class="label">Last 30 entries</span>
          <span class="value" id="metric-total">0</span>
        </div>
        <div class="metric">
          <span class="label">Best day</span>
          <span class="value" id="metric-best">0</span>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TODAY = '{{DATE}}';
    const listEl = document.getElementById('habit-list');
    const emptyEl = document.getElementById('empty-hint');
    const selectEl = document.getElementById('habit-select');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const metricToday = document.getElementById('metric-today');
    const metricTotal = document.getElementById('metric-total');
    const metricBest = document.getElementById('metric-best');

    let habits = [];
    let selectedHabitId = '';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const renderHabits = () => {
      listEl.innerHTML = '';
      emptyEl.hidden = habits.length > 0;

      habits.forEach((habit) => {
        const item = document.createElement('li');
        item.className = 'habit';

        const row = document.createElement('div');
        row.className = 'habit-row';

        const main = document.createElement('div');
        main.className = 'habit-main';

        const check = document.createElement('button');
        check.className = 'check';
        const doneToday = habit.last_completed_date === TODAY;
        if (doneToday) {
          check.classList.add('done');
          check.textContent = '✓';
          check.disabled = true;
        }
        check.addEventListener('click', () => {
          completeHabit(habit.id).catch((err) => setStatus(err.message, 'error'));
        });

        const info = document.createElement('div');
        const name = document.createElement('div');
        name.className = 'habit-name';
        name.textContent = habit.name;
        const streak = document.createElement('div');
        streak.className = 'streak';
        streak.innerHTML = 'Streak: <b>🔥 ' + habit.current_streak +
          '</b> (Longest: ' + habit.longest_streak + ')';
        info.appendChild(name);
        info.appendChild(streak);

        main.appendChild(check);
        main.appendChild(info);

        const del = document.createElement('button');
        del.className = 'delete';
        del.textContent = '×';
        del.setAttribute('aria-label', 'Delete habit');
        del.addEventListener('click', () => {
          deleteHabit(habit.id).catch((err) => setStatus(err.message, 'error'));
        });

        row.appendChild(main);
        row.appendChild(del);

        const timeRow = document.createElement('div');
        timeRow.className = 'time-row';

        const label = document.createElement('span');
        label.textContent = 'Log time (mins):';

        const input = document.createElement('input');
        input.type = 'number';
        input.min = '0';
        input.placeholder = 'e.g., 30';

        const log = document.createElement('button');
        log.textContent = 'Log Time';
        log.addEventListener('click', () => {
          logTime(habit.id, input.value).catch((err) => setStatus(err.message, 'error'));
        });

        timeRow.appendChild(label);
        timeRow.appendChild(input);
        timeRow.appendChild(log);

        item.appendChild(row);
        item.appendChild(timeRow);
        listEl.appendChild(item);
      });
    };

    const renderSelect = () => {
      selectEl.innerHTML = '';
      habits.forEach((habit) => {
        const option = document.createElement('option');
        option.value = habit.id;
        option.textContent = habit.name;
        selectEl.appendChild(option);
      });
      if (!habits.some((habit) => habit.id === selectedHabitId)) {
        selectedHabitId = habits.length ? habits[0].id : '';
      }
      selectEl.value = selectedHabitId;
    };

    const renderChart = (entries) => {
      if (!entries.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No time logged yet</text>';
        metricToday.textContent = '0';
        metricTotal.textContent = '0';
        metricBest.textContent = '0';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const values = entries.map((entry) => entry.minutes);
      const min = 0;
      let max = Math.max.apply(null, values);
      if (max === 0) {
        max = 1;
      }

      const range = max - min;
      const xStep = entries.length > 1 ? (width - paddingX * 2) / (entries.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = entries
        .map((entry, index) => (index === 0 ? 'M' : 'L') + ' ' + x(index).toFixed(2) + ' ' + y(entry.minutes).toFixed(2))
        .join(' ');
      const baseline = y(0).toFixed(2);
      const fill = path + ' L ' + x(entries.length - 1).toFixed(2) + ' ' + baseline +
        ' L ' + x(0).toFixed(2) + ' ' + baseline + ' Z';

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += '<line class="chart-grid" x1="' + paddingX + '" y1="' + yPos + '" x2="' + (width - paddingX) + '" y2="' + yPos + '" />';
        grid += '<text class="chart-label" x="' + (paddingX - 10) + '" y="' + (yPos + 4) + '" text-anchor="end">' + Math.round(value) + '</text>';
      }

      const labelEvery = entries.length > 8 ? Math.ceil(entries.length / 8) : 1;
      const xLabels = entries
        .map((entry, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return '<text class="chart-label" x="' + x(index) + '" y="' + (height - paddingY + 18) + '" text-anchor="middle">' + entry.date.slice(5) + '</text>';
        })
        .join('');

      const circles = entries
        .map((entry, index) => '<circle class="chart-point" cx="' + x(index) + '" cy="' + y(entry.minutes) + '" r="4" />')
        .join('');

      chartEl.innerHTML = grid + '<path class="chart-fill" d="' + fill + '" />' +
        '<path class="chart-line" d="' + path + '" />' + circles + xLabels;

      const todayEntry = entries.find((entry) => entry.date === TODAY);
      const total = values.reduce((acc, value) => acc + value, 0);
      metricToday.textContent = todayEntry ? todayEntry.minutes : 0;
      metricTotal.textContent = total;
      metricBest.textContent = Math.max.apply(null, values);
    };

    const loadHabits = async () => {
      habits = await request('/api/habits');
      renderHabits();
      renderSelect();
    };

    const loadSeries = async () => {
      if (!selectedHabitId) {
        renderChart([]);
        return;
      }
      const series = await request('/api/habits/' + selectedHabitId + '/series');
      renderChart(series.entries);
    };

    const refresh = async () => {
      await loadHabits();
      await loadSeries();
    };

    const addHabit = async (name) => {
      await request('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name })
      });
      await refresh();
      setStatus('Habit added', 'ok');
    };

    const completeHabit = async (id) => {
      await request('/api/habits/' + id + '/complete', { method: 'POST' });
      await loadHabits();
      setStatus('Completed for today', 'ok');
    };

    const logTime = async (id, raw) => {
      const minutes = parseInt(raw, 10);
      if (isNaN(minutes) || minutes < 0) {
        setStatus('Enter a non-negative number of minutes', 'error');
        return;
      }
      await request('/api/habits/' + id + '/time', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ minutes })
      });
      await loadSeries();
      setStatus('Time logged', 'ok');
    };

    const deleteHabit = async (id) => {
      await request('/api/habits/' + id, { method: 'DELETE' });
      await refresh();
      setStatus('Habit deleted', 'ok');
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('habit-name');
      const name = input.value.trim();
      if (!name) {
        setStatus('Enter a habit name', 'error');
        return;
      }
      input.value = '';
      addHabit(name).catch((err) => setStatus(err.message, 'error'));
    });

    selectEl.addEventListener('change', () => {
      selectedHabitId = selectEl.value;
      loadSeries().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
